use std::path::{Path, PathBuf};

use crate::{CatalogConfig, CatalogError, PACKAGE_FILE_PATTERN, Result, find_files};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    pub root: PathBuf,
    /// Directory holding the package manifest and its CSVs.
    pub catalog_dir: PathBuf,
    pub package_file: PathBuf,
}

/// Canonicalizes `root` and finds the first package manifest under its
/// configured catalog directory.
///
/// # Errors
///
/// Returns `CatalogError::RootNotFound` if `root` does not exist and
/// `CatalogError::PackageNotFound` if no package manifest can be found.
pub fn resolve_project_paths(root: &Path, config: &CatalogConfig) -> Result<ProjectPaths> {
    let root = dunce::canonicalize(root).map_err(|source| CatalogError::RootNotFound {
        path: root.to_path_buf(),
        source,
    })?;

    let search_dir = root.join(config.catalog_dir());
    let not_found = || CatalogError::PackageNotFound {
        search_dir: search_dir.clone(),
        pattern: PACKAGE_FILE_PATTERN,
    };

    if !search_dir.is_dir() {
        return Err(not_found());
    }

    let package_file = find_files(&search_dir, PACKAGE_FILE_PATTERN)?
        .into_iter()
        .next()
        .ok_or_else(not_found)?;

    let catalog_dir = package_file
        .parent()
        .map_or_else(|| search_dir.clone(), Path::to_path_buf);

    Ok(ProjectPaths {
        root,
        catalog_dir,
        package_file,
    })
}
