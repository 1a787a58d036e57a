use std::path::{Path, PathBuf};

use crate::Result;

pub trait ChangeSetProvider: Send + Sync {
    /// Absolute paths of files with unstaged or staged changes. Order and
    /// duplicates carry no meaning.
    ///
    /// # Errors
    ///
    /// Returns an error if the change set cannot be determined. Callers must
    /// not treat that as an empty change set.
    fn changed_files(&self, project_root: &Path) -> Result<Vec<PathBuf>>;
}
