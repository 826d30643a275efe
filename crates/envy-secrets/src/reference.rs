//! Provider reference parsing

use anyhow::{bail, Result};
use std::fmt;

/// A parsed `provider://path` reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretReference {
    /// Provider name (the part before `://`)
    pub provider: String,
    /// Provider-specific secret path (the part after `://`)
    pub path: String,
}

impl SecretReference {
    /// Parse a reference string, splitting on the first `://`
    pub fn parse(reference: &str) -> Result<Self> {
        let Some((provider, path)) = reference.split_once("://") else {
            bail!(
                "Invalid provider reference '{}': expected <provider>://<path>",
                reference
            );
        };

        if provider.is_empty() {
            bail!(
                "Invalid provider reference '{}': missing provider name",
                reference
            );
        }

        Ok(Self {
            provider: provider.to_string(),
            path: path.to_string(),
        })
    }
}

impl fmt::Display for SecretReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.provider, self.path)
    }
}
