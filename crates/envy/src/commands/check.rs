//! Check templates and variables for consistency

use anyhow::{bail, Result};
use camino::Utf8Path;
use envy_templates::TemplateRegistry;
use envy_vars::{check_consistency, list_template_variable_keys};

use crate::cli::CheckArgs;
use crate::commands::{find_workspace, load_resolver, selection_from_args};
use crate::output;

pub async fn run(args: CheckArgs, dir: Option<&Utf8Path>) -> Result<()> {
    let workspace = find_workspace(dir)?;
    let registry = TemplateRegistry::new(&workspace);
    let template_keys = list_template_variable_keys(&registry)?;

    let resolver = load_resolver(&workspace)?;
    let selection = selection_from_args(&args.set);

    let spinner = output::spinner("Resolving variables...");
    let variables = resolver.load_variables(&selection).await;
    spinner.finish_and_clear();
    let variables = variables?;

    let mut errors = 0usize;
    let mut warnings = 0usize;
    check_consistency(
        &template_keys,
        &variables,
        |name| {
            errors += 1;
            output::error(&format!(
                "Variable '{}' is used in templates but not defined",
                name
            ));
        },
        |name| {
            warnings += 1;
            output::warning(&format!("Variable '{}' is defined but never used", name));
        },
    );

    if errors == 0 && warnings == 0 {
        output::success("Templates and variables are consistent");
        return Ok(());
    }

    println!();
    output::info(&format!("{} error(s), {} warning(s)", errors, warnings));

    if errors > 0 {
        bail!("Consistency check failed with {} error(s)", errors);
    }

    Ok(())
}
