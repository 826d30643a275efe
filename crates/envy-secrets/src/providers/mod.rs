//! Secret provider trait and implementations

pub mod vault;

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Trait for secret providers
///
/// A provider turns a provider-specific path into the flat key-value
/// mapping stored there. Each `fetch` spawns at most one external process
/// and is awaited to completion; failures propagate as-is with no retry.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Fetch the key-value mapping stored at `path`
    async fn fetch(&self, path: &str) -> Result<BTreeMap<String, String>>;

    /// Validate this provider is usable (e.g., its CLI is installed)
    fn validate(&self) -> Result<()>;

    /// Provider name as it appears before `://` in references
    fn name(&self) -> &'static str;
}

pub use vault::VaultProvider;
