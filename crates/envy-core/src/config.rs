//! Variables configuration (`envy/variables.json`)
//!
//! The file is hand-edited by users. It carries a reserved `common` section
//! applied to every selection, plus one section per category. Category
//! sections map dotted hierarchical keys (e.g. `"prod.us-east"`) to either
//! literal variable values or a `provider://path` reference that is resolved
//! through a secret provider at load time.

use crate::error::{Error, Result};
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

/// Flat variable-name to value mapping, iterated in sorted key order
pub type VariableMap = BTreeMap<String, String>;

/// One category's configuration: dotted hierarchical key to entry
pub type CategoryConfig = BTreeMap<String, CategoryEntry>;

/// A single entry under a category's dotted key
///
/// JSON objects deserialize as literal values, JSON strings as provider
/// references; no other shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryEntry {
    /// Literal variable values
    Values(VariableMap),
    /// A `provider://path` reference resolved at load time
    Reference(String),
}

/// Parsed `variables.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariablesConfig {
    /// Variables applied to every selection, overlaid last so they take
    /// final precedence over category-derived values
    #[serde(default)]
    pub common: VariableMap,

    /// Category name to that category's hierarchical configuration
    #[serde(flatten)]
    pub categories: BTreeMap<String, CategoryConfig>,
}

impl VariablesConfig {
    /// Load the configuration from `path`
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config_not_found(path.as_str())
            } else {
                Error::Io(e)
            }
        })?;
        let config: VariablesConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        Ok(content)
    }

    /// Save the configuration to `path`, creating parent directories
    pub fn save(&self, path: &Utf8Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Look up a category's configuration by name
    pub fn category(&self, name: &str) -> Option<&CategoryConfig> {
        self.categories.get(name)
    }

    /// Names of all configured categories (excluding `common`)
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}
