mod error;
mod repository;

pub use error::GitError;
pub use repository::Repository;

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, GitError>;

/// Unstaged changes followed by staged changes, as absolute paths under the
/// work tree. A path changed in both places appears twice.
///
/// # Errors
///
/// Returns an error if the path is not inside a git work tree or if a diff fails.
pub fn modified_files(path: &Path) -> Result<Vec<PathBuf>> {
    Repository::open(path)?.modified_files()
}
