//! # envy-secrets
//!
//! Secret provider gateway for the Envy CLI. Resolves `provider://path`
//! references into flat key-value mappings by invoking an external
//! secret-retrieval CLI and parsing its JSON output.

pub mod providers;
pub mod reference;
pub mod registry;

pub use providers::{SecretProvider, VaultProvider};
pub use reference::SecretReference;
pub use registry::ProviderRegistry;
