use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};

use crate::{CSV_FILE_PATTERN, CatalogError, Result};

/// Recursively finds files under `dir` whose file name matches `pattern`.
///
/// Entries are visited in name order, and a directory's own matches come
/// before anything found in its subdirectories, so the first element is a
/// stable "first match".
///
/// # Errors
///
/// Returns `CatalogError::GlobPattern` for an invalid pattern and
/// `CatalogError::DirectoryRead` if a directory cannot be listed.
pub fn find_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Glob::new(pattern)
        .map_err(|source| CatalogError::GlobPattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let mut results = Vec::new();
    collect_matching_files(dir, &matcher, &mut results)?;
    Ok(results)
}

/// # Errors
///
/// Returns an error if any directory under `catalog_dir` cannot be listed.
pub fn list_csvs(catalog_dir: &Path) -> Result<Vec<PathBuf>> {
    find_files(catalog_dir, CSV_FILE_PATTERN)
}

fn collect_matching_files(
    current: &Path,
    matcher: &GlobMatcher,
    results: &mut Vec<PathBuf>,
) -> Result<()> {
    let read_error = |source| CatalogError::DirectoryRead {
        path: current.to_path_buf(),
        source,
    };

    let mut entries = std::fs::read_dir(current)
        .map_err(read_error)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_error)?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut subdirs = Vec::new();

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(read_error)?;

        if file_type.is_dir() {
            subdirs.push(path);
        } else if matcher.is_match(entry.file_name()) {
            results.push(path);
        }
    }

    for subdir in subdirs {
        collect_matching_files(&subdir, matcher, results)?;
    }

    Ok(())
}
