//! Resolve and display variables for a category selection

use anyhow::Result;
use camino::Utf8Path;

use crate::cli::VarsArgs;
use crate::commands::{find_workspace, load_resolver, selection_from_args};
use crate::output;

pub async fn run(args: VarsArgs, dir: Option<&Utf8Path>) -> Result<()> {
    let workspace = find_workspace(dir)?;
    let resolver = load_resolver(&workspace)?;
    let selection = selection_from_args(&args.set);

    let spinner = output::spinner("Resolving variables...");
    let variables = resolver.load_variables(&selection).await;
    spinner.finish_and_clear();
    let variables = variables?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&variables)?);
        return Ok(());
    }

    if variables.is_empty() {
        output::info("No variables resolved for this selection");
        return Ok(());
    }

    output::header(&format!("Resolved variables ({})", variables.len()));
    for (name, value) in &variables {
        output::kv(name, value);
    }

    Ok(())
}
