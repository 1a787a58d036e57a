use std::path::{Path, PathBuf};

use csv_protect_git::Repository;

use crate::Result;
use crate::traits::ChangeSetProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeSetProvider for Git2Provider {
    fn changed_files(&self, project_root: &Path) -> Result<Vec<PathBuf>> {
        let repo = Repository::open(project_root)?;
        Ok(repo.modified_files()?)
    }
}
