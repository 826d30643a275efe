//! Template registration list (`envy/paths.json`) and template storage
//!
//! Registrations are an ordered sequence; on-disk order is registration
//! order and survives every read/write cycle. Template files themselves
//! live under `envy/templates/` keyed by their registered name.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use envy_core::Workspace;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// One registered template: `from` names the stored template file, `to` is
/// the workspace-relative path the generated file is written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRegistration {
    pub from: String,
    pub to: Utf8PathBuf,
}

impl TemplateRegistration {
    pub fn new(from: impl Into<String>, to: impl Into<Utf8PathBuf>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Access to a workspace's template registrations and stored templates
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    paths_file: Utf8PathBuf,
    templates_dir: Utf8PathBuf,
}

impl TemplateRegistry {
    /// Create a registry over the given workspace's state files
    pub fn new(workspace: &Workspace) -> Self {
        Self {
            paths_file: workspace.paths_file(),
            templates_dir: workspace.templates_dir(),
        }
    }

    /// Load all registrations in registration order
    pub fn load(&self) -> Result<Vec<TemplateRegistration>> {
        let content = fs::read_to_string(&self.paths_file).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::registry_not_found(self.paths_file.as_str())
            } else {
                Error::Io(e)
            }
        })?;
        let registrations: Vec<TemplateRegistration> = serde_json::from_str(&content)?;
        Ok(registrations)
    }

    /// Write the full registration list, preserving the given order
    pub fn save(&self, registrations: &[TemplateRegistration]) -> Result<()> {
        if let Some(parent) = self.paths_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut content = serde_json::to_string_pretty(registrations)?;
        content.push('\n');
        fs::write(&self.paths_file, content)?;
        Ok(())
    }

    /// Append a registration and return the updated list
    pub fn append(&self, registration: TemplateRegistration) -> Result<Vec<TemplateRegistration>> {
        let mut registrations = self.load()?;
        debug!("Registering template '{}'", registration.from);
        registrations.push(registration);
        self.save(&registrations)?;
        Ok(registrations)
    }

    /// Whether a template file with this name is already stored
    pub fn template_exists(&self, name: &str) -> bool {
        self.template_path(name).exists()
    }

    /// Path of the stored template file for `name`
    pub fn template_path(&self, name: &str) -> Utf8PathBuf {
        self.templates_dir.join(name)
    }

    /// Read a stored template's raw text
    pub fn read_template(&self, name: &str) -> Result<String> {
        fs::read_to_string(self.template_path(name)).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::template_not_found(name)
            } else {
                Error::Io(e)
            }
        })
    }

    /// Copy a source file into the templates directory under `name`
    pub fn import(&self, source: &Utf8Path, name: &str) -> Result<()> {
        if !source.exists() {
            return Err(Error::file_not_found(source.as_str()));
        }
        if self.template_exists(name) {
            return Err(Error::template_exists(name));
        }

        fs::create_dir_all(&self.templates_dir)?;
        fs::copy(source, self.template_path(name))?;
        debug!("Imported '{}' as template '{}'", source, name);
        Ok(())
    }
}
