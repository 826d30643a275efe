//! HashiCorp Vault provider backed by the vault CLI

use crate::providers::SecretProvider;
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::process::Command;
use tracing::debug;

/// Resolves `vault://<path>` references by spawning
/// `vault kv get -format=json <path>` and extracting `data.data` from the
/// KV v2 read response.
#[derive(Debug, Default)]
pub struct VaultProvider;

impl VaultProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretProvider for VaultProvider {
    async fn fetch(&self, path: &str) -> Result<BTreeMap<String, String>> {
        debug!("Fetching vault secret: {}", path);

        let output = Command::new("vault")
            .args(["kv", "get", "-format=json", path])
            .output()
            .await
            .context("Failed to execute 'vault' command. Is the Vault CLI installed?")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("vault kv get failed for '{}': {}", path, stderr.trim());
        }

        let response: serde_json::Value = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("Invalid JSON from vault for '{}'", path))?;

        extract_kv(&response, path)
    }

    fn validate(&self) -> Result<()> {
        which::which("vault").context("vault CLI not found in PATH")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "vault"
    }
}

/// Pull the flat mapping out of a KV v2 read response (`.data.data`)
fn extract_kv(response: &serde_json::Value, path: &str) -> Result<BTreeMap<String, String>> {
    let data = response
        .get("data")
        .and_then(|d| d.get("data"))
        .ok_or_else(|| {
            anyhow!(
                "Unexpected vault response for '{}': missing data.data",
                path
            )
        })?;

    let object = data.as_object().ok_or_else(|| {
        anyhow!(
            "Unexpected vault response for '{}': data.data is not an object",
            path
        )
    })?;

    let mut values = BTreeMap::new();
    for (key, value) in object {
        let rendered = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            other => bail!(
                "Unsupported value for key '{}' in vault secret '{}': {}",
                key,
                path,
                other
            ),
        };
        values.insert(key.clone(), rendered);
    }

    Ok(values)
}
