//! Structure classification over a workspace root.
//!
//! Only the immediate children of the root are examined; matching is
//! case-insensitive against the fixed sets below.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::warn;

const README_PREFIX: &str = "readme";
const LICENSE_PREFIXES: &[&str] = &["license", "licence"];
const REQUIREMENTS_FILES: &[&str] = &["requirements.txt"];
const BUILD_MANIFESTS: &[&str] = &["pyproject.toml", "cargo.toml", "build.gradle", "pom.xml"];
const PACKAGE_MANIFESTS: &[&str] = &["package.json"];
const CONTAINER_FILES: &[&str] = &["dockerfile", "containerfile"];
const SOURCE_DIRECTORIES: &[&str] = &["src"];
const TEST_DIRECTORIES: &[&str] = &["tests", "test", "__tests__"];
const DOC_DIRECTORIES: &[&str] = &["docs", "doc", "documentation"];
const CI_DIRECTORIES: &[&str] = &[".github", ".gitlab-ci", ".circleci", "ci"];

/// Presence flags for the fixed set of files and directories checked at
/// the workspace root. Each flag is independent of the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureFlags {
    pub has_readme: bool,
    pub has_license: bool,
    pub has_gitignore: bool,
    pub has_requirements_file: bool,
    pub has_build_manifest: bool,
    pub has_package_manifest: bool,
    pub has_container_file: bool,
    pub has_source_directory: bool,
    pub has_tests_directory: bool,
    pub has_docs_directory: bool,
    pub has_ci_configuration: bool,
}

/// Classify the immediate children of `root`.
///
/// Never fails: enumeration problems are logged as warnings and leave the
/// affected flags false, so a complete flag set is always produced.
pub async fn classify_structure(root: &Path) -> StructureFlags {
    let mut files: Vec<String> = Vec::new();
    let mut dirs: Vec<String> = Vec::new();

    let mut entries = match fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %root.display(), error = %e, "could not enumerate workspace root");
            return StructureFlags::default();
        }
    };

    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let name = entry.file_name().to_string_lossy().to_lowercase();
                match entry.file_type().await {
                    Ok(kind) if kind.is_dir() => dirs.push(name),
                    Ok(kind) if kind.is_file() => files.push(name),
                    Ok(_) => {}
                    Err(e) => warn!(entry = %name, error = %e, "could not stat entry"),
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!(path = %root.display(), error = %e, "stopped enumerating workspace root");
                break;
            }
        }
    }

    let file_in = |candidates: &[&str]| files.iter().any(|f| candidates.contains(&f.as_str()));
    let dir_in = |candidates: &[&str]| dirs.iter().any(|d| candidates.contains(&d.as_str()));

    StructureFlags {
        has_readme: files.iter().any(|f| f.starts_with(README_PREFIX)),
        has_license: files
            .iter()
            .any(|f| LICENSE_PREFIXES.iter().any(|p| f.starts_with(p))),
        has_gitignore: files.iter().any(|f| f == ".gitignore"),
        has_requirements_file: file_in(REQUIREMENTS_FILES),
        has_build_manifest: file_in(BUILD_MANIFESTS),
        has_package_manifest: file_in(PACKAGE_MANIFESTS),
        has_container_file: file_in(CONTAINER_FILES),
        has_source_directory: dir_in(SOURCE_DIRECTORIES),
        has_tests_directory: dir_in(TEST_DIRECTORIES),
        has_docs_directory: dir_in(DOC_DIRECTORIES),
        has_ci_configuration: dir_in(CI_DIRECTORIES),
    }
}
