//! Repository inspection: fetch, classify, extract.
//!
//! The pipeline sees inspection only through the narrow
//! [`RepositoryInspector`] capability: URL in, structured record out.
//! Failures are captured into the record's error shape rather than raised
//! across this boundary, so callers always receive a well-formed record.

pub mod content;
pub mod record;
pub mod structure;
pub mod workspace;

pub use record::{inspect_workspace, InspectionRecord, RunMetadata};
pub use structure::StructureFlags;
pub use workspace::Workspace;

use async_trait::async_trait;
use tracing::{error, info};

use crate::config::Settings;
use crate::error::Result;

#[async_trait]
pub trait RepositoryInspector: Send + Sync {
    async fn inspect(&self, repository_url: &str) -> InspectionRecord;
}

/// Inspector backed by a shallow `git clone` into an ephemeral workspace.
pub struct GitInspector {
    max_file_size_kb: u64,
    temp_dir_prefix: String,
}

impl GitInspector {
    pub fn new(settings: &Settings) -> Self {
        Self {
            max_file_size_kb: settings.max_file_size_kb,
            temp_dir_prefix: settings.temp_dir_prefix.clone(),
        }
    }

    async fn try_inspect(&self, url: &str) -> Result<InspectionRecord> {
        workspace::validate_repository_url(url)?;

        let workspace = Workspace::create(&self.temp_dir_prefix)?;
        workspace.clone_repository(url).await?;

        let record = inspect_workspace(url, workspace.root(), self.max_file_size_kb).await;
        Ok(record)
        // workspace drops here: the directory is removed on success and on
        // every early-return error path above
    }
}

#[async_trait]
impl RepositoryInspector for GitInspector {
    async fn inspect(&self, repository_url: &str) -> InspectionRecord {
        info!(url = repository_url, "starting repository inspection");
        match self.try_inspect(repository_url).await {
            Ok(record) => {
                info!(url = repository_url, "repository inspection complete");
                record
            }
            Err(e) => {
                error!(url = repository_url, error = %e, "repository inspection failed");
                InspectionRecord::from_error(&e)
            }
        }
    }
}
