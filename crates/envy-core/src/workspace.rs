//! Workspace discovery and layout
//!
//! A workspace is any directory (typically a repository root) containing an
//! `envy/` state directory. All file locations are derived from a
//! [`Workspace`] value constructed up front, so components never reach for
//! fixed global paths and tests can point everything at a temp directory.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

/// Directory holding all envy state inside a workspace
pub const ENVY_DIR: &str = "envy";

/// Template registration list file name
pub const PATHS_FILE: &str = "paths.json";

/// Variables configuration file name
pub const VARIABLES_FILE: &str = "variables.json";

/// Directory registered templates are copied into
pub const TEMPLATES_DIR: &str = "templates";

/// A located envy workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: Utf8PathBuf,
}

impl Workspace {
    /// Open a workspace rooted at the given directory without checking
    /// whether its state files exist yet (used by `init`)
    pub fn at(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find a workspace by walking up from `start` until a directory
    /// containing `envy/paths.json` is found
    pub fn discover(start: &Utf8Path) -> Result<Self> {
        let mut current = start;

        loop {
            if current.join(ENVY_DIR).join(PATHS_FILE).exists() {
                debug!("Found workspace at {}", current);
                return Ok(Self::at(current));
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::workspace_not_found(start.as_str()))
    }

    /// Find a workspace by walking up from the current directory
    pub fn discover_from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        let cwd = Utf8PathBuf::try_from(cwd)
            .map_err(|_| Error::invalid_config("Current directory path is not valid UTF-8"))?;
        Self::discover(&cwd)
    }

    /// Workspace root directory
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// The envy state directory (`<root>/envy`)
    pub fn envy_dir(&self) -> Utf8PathBuf {
        self.root.join(ENVY_DIR)
    }

    /// Path of the template registration list
    pub fn paths_file(&self) -> Utf8PathBuf {
        self.envy_dir().join(PATHS_FILE)
    }

    /// Path of the variables configuration file
    pub fn variables_file(&self) -> Utf8PathBuf {
        self.envy_dir().join(VARIABLES_FILE)
    }

    /// Directory registered templates are stored in
    pub fn templates_dir(&self) -> Utf8PathBuf {
        self.envy_dir().join(TEMPLATES_DIR)
    }

    /// Path of the workspace `.gitignore`
    pub fn gitignore_file(&self) -> Utf8PathBuf {
        self.root.join(".gitignore")
    }

    /// Express `path` relative to the workspace root, if it lies inside it
    pub fn relativize<'a>(&self, path: &'a Utf8Path) -> Option<&'a Utf8Path> {
        path.strip_prefix(&self.root).ok()
    }
}
