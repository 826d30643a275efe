//! List registered templates

use anyhow::Result;
use camino::Utf8Path;
use envy_templates::TemplateRegistry;

use crate::cli::ListArgs;
use crate::commands::find_workspace;
use crate::output;

pub async fn run(args: ListArgs, dir: Option<&Utf8Path>) -> Result<()> {
    let workspace = find_workspace(dir)?;
    let registry = TemplateRegistry::new(&workspace);
    let registrations = registry.load()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&registrations)?);
        return Ok(());
    }

    if registrations.is_empty() {
        output::info("No templates registered. Add one with 'envy add <file>'");
        return Ok(());
    }

    output::header(&format!("Registered templates ({})", registrations.len()));
    for registration in &registrations {
        output::kv(&registration.from, registration.to.as_str());
    }

    Ok(())
}
