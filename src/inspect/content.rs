//! Size-capped text extraction for README/LICENSE-like files.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use crate::error::Error;

pub const README_CANDIDATES: &[&str] = &["readme", "readme.md", "readme.txt", "readme.rst"];
pub const LICENSE_CANDIDATES: &[&str] = &[
    "license",
    "licence",
    "license.md",
    "license.txt",
    "licence.txt",
];

/// Find the first immediate child of `root` whose lowercased name is in
/// `candidates`. Matching follows directory enumeration order; the first
/// hit wins.
pub async fn find_named_file(root: &Path, candidates: &[&str]) -> Option<PathBuf> {
    let mut entries = match fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %root.display(), error = %e, "could not enumerate workspace root");
            return None;
        }
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let name = entry.file_name().to_string_lossy().to_lowercase();
        if candidates.contains(&name.as_str()) {
            match entry.file_type().await {
                Ok(kind) if kind.is_file() => return Some(entry.path()),
                _ => {}
            }
        }
    }

    None
}

/// Read `path` as text, capped at `max_size_kb`.
///
/// Files over the cap yield a placeholder naming the actual size instead
/// of their content. Bytes that are not valid UTF-8 are replaced. A
/// missing file yields `None`; read problems also degrade to `None` after
/// a logged warning, never aborting the run.
pub async fn read_file_content(path: &Path, max_size_kb: u64) -> Option<String> {
    match try_read(path, max_size_kb).await {
        Ok(content) => content,
        Err(e) => {
            warn!(error = %e, "skipping unreadable file");
            None
        }
    }
}

async fn try_read(path: &Path, max_size_kb: u64) -> Result<Option<String>, Error> {
    let metadata = match fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(Error::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    if metadata.len() > max_size_kb * 1024 {
        warn!(
            path = %path.display(),
            size_bytes = metadata.len(),
            cap_kb = max_size_kb,
            "file exceeds size limit"
        );
        return Ok(Some(format!(
            "[File too large - {:.1}KB]",
            metadata.len() as f64 / 1024.0
        )));
    }

    let bytes = fs::read(path).await.map_err(|e| Error::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), "read file");
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}
