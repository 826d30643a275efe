//! Register a config file as a template

use anyhow::{anyhow, bail, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use dialoguer::Input;
use envy_templates::{git, gitignore, TemplateRegistration, TemplateRegistry};

use crate::cli::AddArgs;
use crate::commands::find_workspace;
use crate::output;

pub async fn run(args: AddArgs, dir: Option<&Utf8Path>) -> Result<()> {
    let workspace = find_workspace(dir)?;

    let source = if args.file.is_absolute() {
        args.file.clone()
    } else {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let cwd = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|_| anyhow!("Current directory path is not valid UTF-8"))?;
        cwd.join(&args.file)
    };

    if !source.exists() {
        bail!("Failed to add file. File not found: {}", source);
    }

    let relative = workspace.relativize(&source).with_context(|| {
        format!(
            "'{}' is outside the workspace rooted at {}",
            source,
            workspace.root()
        )
    })?;
    let to = relative.to_path_buf();

    let registry = TemplateRegistry::new(&workspace);

    let mut template_name = match args.name {
        Some(name) => name,
        None => source
            .file_name()
            .with_context(|| format!("'{}' has no file name", source))?
            .to_string(),
    };

    // Template file names must be unique; keep prompting until one is free.
    while registry.template_exists(&template_name) {
        output::warning(&format!(
            "Template named '{}' already exists in {}",
            template_name,
            workspace.templates_dir()
        ));
        template_name = Input::new()
            .with_prompt("Choose another name")
            .with_initial_text(&template_name)
            .interact_text()?;
    }

    registry.import(&source, &template_name)?;

    let registrations =
        registry.append(TemplateRegistration::new(template_name.clone(), to.clone()))?;

    gitignore::write_block(&workspace.gitignore_file(), &registrations)?;

    git::remove_from_index(workspace.root(), &to).await?;

    output::success(&format!(
        "File '{}' added to envy as template '{}'",
        to, template_name
    ));

    Ok(())
}
