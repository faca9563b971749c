//! Inspection records: the structured result of one analysis run.
//!
//! Success and error records share the same four top-level keys
//! (`readme_content`, `license_content`, `structure_analysis`, `metadata`);
//! an error record adds `error` and empties the rest, so callers branch
//! only on the presence of `error`, never on shape.

use std::path::Path;

use serde::{Serialize, Serializer};
use tokio::fs;
use tracing::{info, warn};

use crate::error::Error;
use crate::inspect::content::{
    find_named_file, read_file_content, LICENSE_CANDIDATES, README_CANDIDATES,
};
use crate::inspect::structure::{classify_structure, StructureFlags};

/// Run metadata attached to a successful inspection.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetadata {
    pub repository_url: String,
    pub cloned_successfully: bool,
    pub workspace_path: String,
    pub total_file_count: usize,
    pub readme_file_name: Option<String>,
    pub license_file_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectionRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub readme_content: Option<String>,
    pub license_content: Option<String>,
    #[serde(serialize_with = "empty_object_when_none")]
    pub structure_analysis: Option<StructureFlags>,
    #[serde(serialize_with = "empty_object_when_none")]
    pub metadata: Option<RunMetadata>,
}

/// Serialize `None` as `{}` so both record shapes carry the same keys.
fn empty_object_when_none<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(inner) => inner.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

impl InspectionRecord {
    /// Build the error-shaped record for a failed inspection.
    pub fn from_error(error: &Error) -> Self {
        Self {
            error: Some(error.to_string()),
            readme_content: None,
            license_content: None,
            structure_analysis: None,
            metadata: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Pretty-printed JSON, the external inspection output format.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Assemble the success-shaped record for a cloned workspace: classify the
/// root, extract README/LICENSE under the size cap, collect metadata.
pub async fn inspect_workspace(
    repository_url: &str,
    root: &Path,
    max_file_size_kb: u64,
) -> InspectionRecord {
    let flags = classify_structure(root).await;

    let readme_file = find_named_file(root, README_CANDIDATES).await;
    let readme_content = match &readme_file {
        Some(path) => {
            info!(file = %path.display(), "README file found");
            read_file_content(path, max_file_size_kb).await
        }
        None => {
            warn!("no README file found in repository");
            None
        }
    };

    let license_file = find_named_file(root, LICENSE_CANDIDATES).await;
    let license_content = match &license_file {
        Some(path) => {
            info!(file = %path.display(), "LICENSE file found");
            read_file_content(path, max_file_size_kb).await
        }
        None => {
            warn!("no LICENSE file found in repository");
            None
        }
    };

    let metadata = RunMetadata {
        repository_url: repository_url.to_string(),
        cloned_successfully: true,
        workspace_path: root.display().to_string(),
        total_file_count: count_entries(root).await,
        readme_file_name: readme_file.as_deref().and_then(file_name_string),
        license_file_name: license_file.as_deref().and_then(file_name_string),
    };

    InspectionRecord {
        error: None,
        readme_content,
        license_content,
        structure_analysis: Some(flags),
        metadata: Some(metadata),
    }
}

fn file_name_string(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}

/// Count every entry under `root` recursively, directories included.
/// Symlinks are counted but not followed.
async fn count_entries(root: &Path) -> usize {
    let mut count = 0;
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "could not enumerate directory");
                continue;
            }
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            count += 1;
            if let Ok(kind) = entry.file_type().await {
                if kind.is_dir() {
                    pending.push(entry.path());
                }
            }
        }
    }

    count
}
