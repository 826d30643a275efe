//! CLI command implementations

pub mod add;
pub mod check;
pub mod generate;
pub mod init;
pub mod list;
pub mod vars;

use anyhow::{Context, Result};
use camino::Utf8Path;
use envy_core::{VariablesConfig, Workspace};
use envy_secrets::ProviderRegistry;
use envy_vars::{Selection, VariableResolver};
use tracing::debug;

/// Locate the workspace from an explicit directory or the current one.
pub(crate) fn find_workspace(dir: Option<&Utf8Path>) -> Result<Workspace> {
    let workspace = match dir {
        Some(dir) => Workspace::discover(dir)?,
        None => Workspace::discover_from_current_dir()?,
    };
    debug!("Using workspace at {}", workspace.root());
    Ok(workspace)
}

/// Build the ordered category selection from repeated `--set` flags.
pub(crate) fn selection_from_args(pairs: &[(String, String)]) -> Selection {
    pairs.iter().cloned().collect()
}

/// Load the variables config and wire it to the default provider registry.
pub(crate) fn load_resolver(workspace: &Workspace) -> Result<VariableResolver> {
    let config = VariablesConfig::load(&workspace.variables_file())
        .with_context(|| format!("Failed to load {}", workspace.variables_file()))?;
    Ok(VariableResolver::new(config, ProviderRegistry::new()))
}
