//! Initialize an envy workspace

use anyhow::{anyhow, bail, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use envy_core::{VariablesConfig, Workspace};
use envy_templates::{gitignore, TemplateRegistry};

use crate::cli::InitArgs;
use crate::output;

pub async fn run(args: InitArgs, dir: Option<&Utf8Path>) -> Result<()> {
    let root = match dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            Utf8PathBuf::from_path_buf(cwd)
                .map_err(|_| anyhow!("Current directory path is not valid UTF-8"))?
        }
    };

    let workspace = Workspace::at(root);

    if workspace.envy_dir().exists() && !args.force {
        bail!(
            "Workspace already initialized at {} (use --force to reinitialize)",
            workspace.envy_dir()
        );
    }

    std::fs::create_dir_all(workspace.templates_dir())
        .with_context(|| format!("Failed to create {}", workspace.templates_dir()))?;

    let registry = TemplateRegistry::new(&workspace);
    registry.save(&[])?;

    VariablesConfig::default().save(&workspace.variables_file())?;

    gitignore::write_block(&workspace.gitignore_file(), &[])?;

    output::success(&format!("Initialized envy workspace at {}", workspace.root()));
    output::kv("Templates", workspace.templates_dir().as_str());
    output::kv("Registrations", workspace.paths_file().as_str());
    output::kv("Variables", workspace.variables_file().as_str());
    println!();
    output::info("Edit envy/variables.json, then register files with 'envy add <file>'");

    Ok(())
}
