//! Error taxonomy for inspection and review runs.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The URL failed the hosting-service prefix check. No network activity
    /// has happened when this is returned.
    #[error("Invalid GitHub URL format: {0}")]
    InvalidUrl(String),

    /// `git clone` could not produce a populated workspace.
    #[error("Failed to clone repository: {0}")]
    Clone(String),

    /// A file under the workspace could not be read. Non-fatal: the caller
    /// degrades the affected field and continues.
    #[error("Failed to read {}: {message}", .path.display())]
    Read { path: PathBuf, message: String },

    /// The reasoning service failed or returned unusable output. Fails the
    /// pipeline run that triggered it.
    #[error("Reasoning service call failed: {0}")]
    Service(String),

    /// Catch-all. Workspace cleanup is still guaranteed.
    #[error("Unexpected error during repository analysis: {0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, Error>;
