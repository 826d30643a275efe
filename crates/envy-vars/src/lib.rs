//! # envy-vars
//!
//! The variable-resolution and substitution engine for the Envy CLI:
//! - hierarchical category resolution (dotted selectors, prefix-ascending
//!   merges, secret references resolved through envy-secrets)
//! - aggregation of categories and `common` into one sorted variable mapping
//! - placeholder scanning across registered templates
//! - template/variable consistency checking
//! - placeholder substitution

pub mod checker;
pub mod resolver;
pub mod scanner;
pub mod substitute;

pub use checker::check_consistency;
pub use resolver::{Selection, VariableResolver};
pub use scanner::{list_template_variable_keys, scan_placeholders};
pub use substitute::fill_variables;
