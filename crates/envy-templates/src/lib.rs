//! # envy-templates
//!
//! Template registration and storage for the Envy CLI:
//! - the ordered `envy/paths.json` registration list
//! - template file import and reads under `envy/templates/`
//! - the managed `.gitignore` block listing generated files
//! - git index removal when a file becomes a template

pub mod error;
pub mod git;
pub mod gitignore;
pub mod registry;

pub use error::{Error, Result};
pub use registry::{TemplateRegistration, TemplateRegistry};
