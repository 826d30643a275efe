//! Git glue for template extraction

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

/// Remove a file from the git index so it stops being tracked
///
/// The working copy stays on disk; it is expected to be covered by the
/// managed `.gitignore` block from then on.
pub async fn remove_from_index(repo_root: &Utf8Path, path: &Utf8Path) -> Result<()> {
    check_git_available().await?;

    debug!("Running: git rm --cached {}", path);
    let output = Command::new("git")
        .current_dir(repo_root)
        .args(["rm", "--cached", path.as_str()])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!(
            "git rm --cached failed: {}",
            stderr
        )));
    }

    Ok(())
}

/// Check if git is available in PATH
pub async fn check_git_available() -> Result<()> {
    let output = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(|_| Error::GitNotFound)?;

    if !output.status.success() {
        return Err(Error::GitNotFound);
    }

    Ok(())
}
