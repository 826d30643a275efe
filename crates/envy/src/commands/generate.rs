//! Generate config files from registered templates

use anyhow::{bail, Context, Result};
use camino::Utf8Path;
use envy_templates::TemplateRegistry;
use envy_vars::{check_consistency, fill_variables, list_template_variable_keys};
use tracing::debug;

use crate::cli::GenerateArgs;
use crate::commands::{find_workspace, load_resolver, selection_from_args};
use crate::output;

pub async fn run(args: GenerateArgs, dir: Option<&Utf8Path>) -> Result<()> {
    let workspace = find_workspace(dir)?;
    let registry = TemplateRegistry::new(&workspace);
    let registrations = registry.load()?;

    if registrations.is_empty() {
        output::info("No templates registered. Add one with 'envy add <file>'");
        return Ok(());
    }

    let template_keys = list_template_variable_keys(&registry)?;

    let resolver = load_resolver(&workspace)?;
    let selection = selection_from_args(&args.set);

    let spinner = output::spinner("Resolving variables...");
    let variables = resolver.load_variables(&selection).await;
    spinner.finish_and_clear();
    let variables = variables?;

    let mut missing = 0usize;
    check_consistency(&template_keys, &variables, |_| missing += 1, |_| {});

    if missing > 0 {
        if args.force {
            output::warning(&format!(
                "Generating anyway; {} placeholder(s) will pass through unfilled",
                missing
            ));
        } else {
            bail!(
                "Refusing to generate: {} variable(s) missing (use --force to override)",
                missing
            );
        }
    }

    for registration in &registrations {
        debug!("Rendering template '{}'", registration.from);
        let template = registry.read_template(&registration.from)?;
        let rendered = fill_variables(&template, &variables);

        let target = workspace.root().join(&registration.to);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent))?;
        }
        std::fs::write(&target, rendered)
            .with_context(|| format!("Failed to write file: {}", target))?;

        output::success(&format!("Generated {}", registration.to));
    }

    Ok(())
}
