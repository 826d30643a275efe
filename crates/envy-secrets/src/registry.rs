//! Provider registry and reference resolution
//!
//! Providers form an open set: the registry dispatches by name, so adding a
//! provider means registering it, not touching the dispatch logic. An
//! unknown provider name in a reference is a static misconfiguration and
//! fails resolution outright.

use crate::providers::{SecretProvider, VaultProvider};
use crate::reference::SecretReference;
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;
use tracing::debug;

/// Named set of secret providers
pub struct ProviderRegistry {
    providers: Vec<Box<dyn SecretProvider>>,
}

impl ProviderRegistry {
    /// Create a registry with the built-in providers
    pub fn new() -> Self {
        Self {
            providers: vec![Box::new(VaultProvider::new())],
        }
    }

    /// Create with custom providers (for testing)
    pub fn with_providers(providers: Vec<Box<dyn SecretProvider>>) -> Self {
        Self { providers }
    }

    /// Register an additional provider
    pub fn register(&mut self, provider: Box<dyn SecretProvider>) {
        self.providers.push(provider);
    }

    /// Resolve a `provider://path` reference into its key-value mapping
    pub async fn resolve(&self, reference: &str) -> Result<BTreeMap<String, String>> {
        let reference = SecretReference::parse(reference)?;
        debug!("Resolving secret reference: {}", reference);

        let provider = self.get(&reference.provider)?;
        provider.fetch(&reference.path).await
    }

    /// Find a registered provider by name
    fn get(&self, name: &str) -> Result<&dyn SecretProvider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
            .ok_or_else(|| {
                anyhow!(
                    "Unknown secret provider '{}'. Registered providers: {}",
                    name,
                    self.names().join(", ")
                )
            })
    }

    /// Names of all registered providers
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Validate all registered providers are usable
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for provider in &self.providers {
            if let Err(e) = provider.validate() {
                errors.push(format!(
                    "Provider '{}' validation failed: {}",
                    provider.name(),
                    e
                ));
            }
        }

        if !errors.is_empty() {
            return Err(anyhow!(
                "Provider validation failed:\n  - {}",
                errors.join("\n  - ")
            ));
        }

        Ok(())
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;

    // Mock provider for testing
    struct MockProvider {
        name: &'static str,
        should_fail: bool,
    }

    #[async_trait]
    impl SecretProvider for MockProvider {
        async fn fetch(&self, path: &str) -> Result<BTreeMap<String, String>> {
            if self.should_fail {
                bail!("Mock failure");
            }

            Ok(BTreeMap::from([
                ("path".to_string(), path.to_string()),
                ("token".to_string(), "mock-value".to_string()),
            ]))
        }

        fn validate(&self) -> Result<()> {
            if self.should_fail {
                bail!("Mock unavailable");
            }
            Ok(())
        }

        fn name(&self) -> &'static str {
            self.name
        }
    }

    #[tokio::test]
    async fn test_resolve_dispatches_by_name() {
        let registry = ProviderRegistry::with_providers(vec![Box::new(MockProvider {
            name: "mock",
            should_fail: false,
        })]);

        let values = registry.resolve("mock://team/service").await.unwrap();
        assert_eq!(values.get("path").map(String::as_str), Some("team/service"));
        assert_eq!(values.get("token").map(String::as_str), Some("mock-value"));
    }

    #[tokio::test]
    async fn test_resolve_unknown_provider() {
        let registry = ProviderRegistry::with_providers(vec![Box::new(MockProvider {
            name: "mock",
            should_fail: false,
        })]);

        let result = registry.resolve("foo://bar").await;
        assert!(result.is_err());

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Unknown secret provider 'foo'"));
        assert!(err_msg.contains("mock"));
    }

    #[tokio::test]
    async fn test_resolve_invalid_reference() {
        let registry = ProviderRegistry::new();

        let result = registry.resolve("not-a-reference").await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("expected <provider>://<path>"));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let registry = ProviderRegistry::with_providers(vec![Box::new(MockProvider {
            name: "mock",
            should_fail: true,
        })]);

        let result = registry.resolve("mock://team/service").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Mock failure"));
    }

    #[test]
    fn test_register_extends_the_set() {
        let mut registry = ProviderRegistry::new();
        assert_eq!(registry.names(), vec!["vault"]);

        registry.register(Box::new(MockProvider {
            name: "mock",
            should_fail: false,
        }));
        assert_eq!(registry.names(), vec!["vault", "mock"]);
    }

    #[test]
    fn test_validate_collects_all_failures() {
        let registry = ProviderRegistry::with_providers(vec![
            Box::new(MockProvider {
                name: "ok",
                should_fail: false,
            }),
            Box::new(MockProvider {
                name: "broken",
                should_fail: true,
            }),
        ]);

        let result = registry.validate();
        assert!(result.is_err());

        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Provider 'broken' validation failed"));
        assert!(!err_msg.contains("Provider 'ok'"));
    }
}
