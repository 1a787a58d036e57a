mod diff;

use std::path::{Path, PathBuf};

use crate::{GitError, Result};

pub struct Repository {
    pub(crate) inner: git2::Repository,
    root: PathBuf,
}

impl Repository {
    /// # Errors
    ///
    /// Returns [`GitError::NotARepository`] if the path is not inside a git repository,
    /// or [`GitError::BareRepository`] if the repository has no work tree.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = git2::Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.to_path_buf(),
        })?;

        let workdir = inner.workdir().ok_or_else(|| GitError::BareRepository {
            path: path.to_path_buf(),
        })?;

        // Diff paths are joined onto this, so it has to compare equal to
        // canonicalized catalog paths. dunce avoids the \\?\ prefix on Windows.
        let root = dunce::canonicalize(workdir)
            .unwrap_or_else(|_| dunce::simplified(workdir).to_path_buf());

        Ok(Self { inner, root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}
