//! # envy-core
//!
//! Core library for the Envy CLI providing:
//! - Workspace discovery (locating the `envy/` state directory)
//! - Variables configuration parsing (variables.json)
//! - Shared error types

pub mod config;
pub mod error;
pub mod workspace;

pub use config::{CategoryConfig, CategoryEntry, VariableMap, VariablesConfig};
pub use error::{Error, Result};
pub use workspace::Workspace;
