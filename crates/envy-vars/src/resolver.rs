//! Category resolution and variable aggregation
//!
//! A selection maps category names to dotted selectors (e.g.
//! `env=prod.us-east`). Each category is resolved prefix-ascending: every
//! ancestor prefix of the selector is looked up and merged, least specific
//! first, so deeper levels override shallower ones. Category results are
//! merged in selection order, later categories overriding earlier, and the
//! `common` section is overlaid last with final precedence.

use anyhow::{Context, Result};
use envy_core::{CategoryConfig, CategoryEntry, VariableMap, VariablesConfig};
use envy_secrets::ProviderRegistry;
use indexmap::IndexMap;
use tracing::debug;

/// Ordered category-name to selector mapping
///
/// Iteration order is the caller's insertion order; it decides which
/// category wins when two categories define the same variable.
pub type Selection = IndexMap<String, String>;

/// Resolves selections against a variables configuration
pub struct VariableResolver {
    config: VariablesConfig,
    providers: ProviderRegistry,
}

impl VariableResolver {
    /// Create a resolver over the given configuration and provider set
    pub fn new(config: VariablesConfig, providers: ProviderRegistry) -> Self {
        Self { config, providers }
    }

    /// Assemble the flat variable mapping for a selection
    ///
    /// The result iterates in sorted key order. Any provider failure or
    /// unknown category aborts the whole resolution; there is no partial
    /// result.
    pub async fn load_variables(&self, selection: &Selection) -> Result<VariableMap> {
        let mut variables = VariableMap::new();

        for (category_name, selector) in selection {
            let category = self.config.category(category_name).with_context(|| {
                format!(
                    "Unknown category '{}'. Configured categories: {}",
                    category_name,
                    self.config.category_names().collect::<Vec<_>>().join(", ")
                )
            })?;

            debug!("Resolving category '{}' for '{}'", category_name, selector);
            let resolved = self.resolve_category(category, selector).await?;
            variables.extend(resolved);
        }

        // common is overlaid last and wins every collision
        variables.extend(self.config.common.clone());

        Ok(variables)
    }

    /// Resolve one category's variables for a dotted selector
    ///
    /// For selector `a.b.c` the prefixes `a`, `a.b`, `a.b.c` are looked up
    /// in that order and merged; prefixes with no entry are skipped.
    /// Reference entries go through the provider registry before merging.
    pub async fn resolve_category(
        &self,
        category: &CategoryConfig,
        selector: &str,
    ) -> Result<VariableMap> {
        let mut variables = VariableMap::new();
        let parts: Vec<&str> = selector.split('.').collect();

        for i in 0..parts.len() {
            let prefix = parts[..=i].join(".");
            let Some(entry) = category.get(&prefix) else {
                continue;
            };

            match entry {
                CategoryEntry::Values(values) => {
                    variables.extend(values.clone());
                }
                CategoryEntry::Reference(reference) => {
                    debug!("Level '{}' resolves through {}", prefix, reference);
                    let values = self
                        .providers
                        .resolve(reference)
                        .await
                        .with_context(|| format!("Failed to resolve '{}'", reference))?;
                    variables.extend(values);
                }
            }
        }

        Ok(variables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use envy_secrets::SecretProvider;
    use std::collections::BTreeMap;

    fn values(pairs: &[(&str, &str)]) -> CategoryEntry {
        CategoryEntry::Values(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn category(entries: Vec<(&str, CategoryEntry)>) -> CategoryConfig {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    fn resolver_with(config: VariablesConfig) -> VariableResolver {
        VariableResolver::new(config, ProviderRegistry::new())
    }

    // Mock provider for testing
    struct MockProvider;

    #[async_trait]
    impl SecretProvider for MockProvider {
        async fn fetch(&self, path: &str) -> Result<BTreeMap<String, String>> {
            if path == "broken" {
                bail!("Mock failure");
            }

            Ok(BTreeMap::from([
                ("secret".to_string(), format!("value-of-{}", path)),
                ("token".to_string(), "mock-token".to_string()),
            ]))
        }

        fn validate(&self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    fn selection(pairs: &[(&str, &str)]) -> Selection {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_resolve_category_merges_prefix_ascending() {
        let env = category(vec![
            ("prod", values(&[("host", "prod.example.com"), ("tier", "base")])),
            ("prod.us", values(&[("tier", "regional")])),
            ("prod.us.east", values(&[("tier", "zonal"), ("az", "east-1")])),
        ]);

        let resolver = resolver_with(VariablesConfig::default());
        let variables = resolver
            .resolve_category(&env, "prod.us.east")
            .await
            .unwrap();

        // Most specific level wins on collision
        assert_eq!(variables.get("tier").map(String::as_str), Some("zonal"));
        assert_eq!(
            variables.get("host").map(String::as_str),
            Some("prod.example.com")
        );
        assert_eq!(variables.get("az").map(String::as_str), Some("east-1"));
    }

    #[tokio::test]
    async fn test_resolve_category_skips_missing_levels() {
        let env = category(vec![
            ("a", values(&[("from_a", "1"), ("shared", "a")])),
            ("a.b.c", values(&[("from_c", "3"), ("shared", "c")])),
        ]);

        let resolver = resolver_with(VariablesConfig::default());
        let variables = resolver.resolve_category(&env, "a.b.c").await.unwrap();

        assert_eq!(variables.get("from_a").map(String::as_str), Some("1"));
        assert_eq!(variables.get("from_c").map(String::as_str), Some("3"));
        assert_eq!(variables.get("shared").map(String::as_str), Some("c"));
    }

    #[tokio::test]
    async fn test_resolve_category_resolves_references() {
        let env = category(vec![
            ("prod", values(&[("host", "prod.example.com")])),
            (
                "prod.us-east",
                CategoryEntry::Reference("mock://envy/prod-us-east".to_string()),
            ),
        ]);

        let resolver = VariableResolver::new(
            VariablesConfig::default(),
            ProviderRegistry::with_providers(vec![Box::new(MockProvider)]),
        );
        let variables = resolver.resolve_category(&env, "prod.us-east").await.unwrap();

        assert_eq!(
            variables.get("secret").map(String::as_str),
            Some("value-of-envy/prod-us-east")
        );
        assert_eq!(
            variables.get("host").map(String::as_str),
            Some("prod.example.com")
        );
    }

    #[tokio::test]
    async fn test_unknown_provider_aborts_resolution() {
        let mut config = VariablesConfig::default();
        config.categories.insert(
            "env".to_string(),
            category(vec![(
                "prod",
                CategoryEntry::Reference("foo://bar".to_string()),
            )]),
        );

        let resolver = resolver_with(config);
        let result = resolver.load_variables(&selection(&[("env", "prod")])).await;

        assert!(result.is_err());
        let err_msg = format!("{:#}", result.unwrap_err());
        assert!(err_msg.contains("Unknown secret provider 'foo'"));
    }

    #[tokio::test]
    async fn test_load_variables_unknown_category() {
        let mut config = VariablesConfig::default();
        config.categories.insert("env".to_string(), category(vec![]));

        let resolver = resolver_with(config);
        let result = resolver
            .load_variables(&selection(&[("enviroment", "prod")]))
            .await;

        assert!(result.is_err());
        let err_msg = format!("{:#}", result.unwrap_err());
        assert!(err_msg.contains("Unknown category 'enviroment'"));
        assert!(err_msg.contains("env"));
    }

    #[tokio::test]
    async fn test_load_variables_output_is_sorted() {
        let mut config = VariablesConfig::default();
        config.common.insert("zulu".to_string(), "z".to_string());
        config.categories.insert(
            "env".to_string(),
            category(vec![(
                "dev",
                values(&[("mike", "m"), ("alpha", "a"), ("x-ray", "x")]),
            )]),
        );

        let resolver = resolver_with(config);
        let variables = resolver
            .load_variables(&selection(&[("env", "dev")]))
            .await
            .unwrap();

        let keys: Vec<&str> = variables.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "mike", "x-ray", "zulu"]);
    }

    #[tokio::test]
    async fn test_common_wins_regardless_of_category_order() {
        let mut config = VariablesConfig::default();
        config
            .common
            .insert("region".to_string(), "global".to_string());
        config.categories.insert(
            "env".to_string(),
            category(vec![("prod", values(&[("region", "us-east")]))]),
        );
        config.categories.insert(
            "dc".to_string(),
            category(vec![("aws", values(&[("region", "eu-west")]))]),
        );

        let resolver = resolver_with(config);

        for order in [
            selection(&[("env", "prod"), ("dc", "aws")]),
            selection(&[("dc", "aws"), ("env", "prod")]),
        ] {
            let variables = resolver.load_variables(&order).await.unwrap();
            assert_eq!(variables.get("region").map(String::as_str), Some("global"));
        }
    }

    #[tokio::test]
    async fn test_selection_order_decides_category_precedence() {
        let mut config = VariablesConfig::default();
        config.categories.insert(
            "env".to_string(),
            category(vec![("prod", values(&[("pool", "env-pool")]))]),
        );
        config.categories.insert(
            "dc".to_string(),
            category(vec![("aws", values(&[("pool", "dc-pool")]))]),
        );

        let resolver = resolver_with(config);

        let env_first = resolver
            .load_variables(&selection(&[("env", "prod"), ("dc", "aws")]))
            .await
            .unwrap();
        assert_eq!(env_first.get("pool").map(String::as_str), Some("dc-pool"));

        let dc_first = resolver
            .load_variables(&selection(&[("dc", "aws"), ("env", "prod")]))
            .await
            .unwrap();
        assert_eq!(dc_first.get("pool").map(String::as_str), Some("env-pool"));
    }

    #[tokio::test]
    async fn test_empty_selection_yields_common_only() {
        let mut config = VariablesConfig::default();
        config.common.insert("org".to_string(), "acme".to_string());

        let resolver = resolver_with(config);
        let variables = resolver.load_variables(&Selection::new()).await.unwrap();

        assert_eq!(variables.len(), 1);
        assert_eq!(variables.get("org").map(String::as_str), Some("acme"));
    }
}
