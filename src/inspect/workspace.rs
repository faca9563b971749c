//! Ephemeral clone workspaces.
//!
//! A [`Workspace`] is a uniquely-named temporary directory that holds one
//! cloned repository for the duration of a single analysis run. Dropping
//! it removes the directory, so every exit path of an inspection cleans up
//! the same way, clone failures included.

use std::path::Path;

use tempfile::TempDir;
use tokio::process::Command;
use tracing::{debug, info};

use crate::error::{Error, Result};

const ACCEPTED_URL_PREFIXES: &[&str] = &["https://github.com/", "http://github.com/"];

/// Check the hosting-service prefix. Runs before any network activity;
/// anything that is not an http(s) GitHub URL is rejected here.
pub fn validate_repository_url(url: &str) -> Result<()> {
    if ACCEPTED_URL_PREFIXES.iter().any(|p| url.starts_with(p)) {
        Ok(())
    } else {
        Err(Error::InvalidUrl(url.to_string()))
    }
}

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create an empty workspace with the configured name prefix.
    pub fn create(prefix: &str) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir()
            .map_err(|e| {
                Error::Unexpected(format!("failed to create temporary directory: {e}"))
            })?;
        debug!(path = %dir.path().display(), "created workspace");
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Shallow-clone `url` into the workspace root.
    ///
    /// A failed clone may leave the workspace partially populated; it is
    /// removed on drop like any other workspace.
    pub async fn clone_repository(&self, url: &str) -> Result<()> {
        let git =
            which::which("git").map_err(|e| Error::Clone(format!("git binary not found: {e}")))?;

        let output = Command::new(git)
            .arg("clone")
            .arg("--depth")
            .arg("1")
            .arg(url)
            .arg(self.root())
            .output()
            .await
            .map_err(|e| Error::Clone(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Clone(stderr.trim().to_string()));
        }

        info!(url, path = %self.root().display(), "cloned repository");
        Ok(())
    }
}
