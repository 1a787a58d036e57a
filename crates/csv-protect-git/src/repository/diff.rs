use std::path::PathBuf;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Files whose work tree content differs from the index, like
    /// `git diff --name-only`. Untracked files are not reported.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be read or the diff fails.
    pub fn unstaged_files(&self) -> Result<Vec<PathBuf>> {
        let diff = self.inner.diff_index_to_workdir(None, None)?;
        self.delta_paths(&diff)
    }

    /// Files whose index content differs from HEAD, like
    /// `git diff --name-only --cached`. On an unborn branch every indexed
    /// file counts as staged.
    ///
    /// # Errors
    ///
    /// Returns an error if HEAD cannot be peeled to a tree or the diff fails.
    pub fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let head_tree = self.head_tree()?;
        let diff = self
            .inner
            .diff_tree_to_index(head_tree.as_ref(), None, None)?;
        self.delta_paths(&diff)
    }

    /// # Errors
    ///
    /// Returns an error if either diff fails.
    pub fn modified_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = self.unstaged_files()?;
        files.extend(self.staged_files()?);
        Ok(files)
    }

    fn head_tree(&self) -> Result<Option<git2::Tree<'_>>> {
        match self.inner.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            Err(e)
                if matches!(
                    e.code(),
                    git2::ErrorCode::UnbornBranch | git2::ErrorCode::NotFound
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn delta_paths(&self, diff: &git2::Diff<'_>) -> Result<Vec<PathBuf>> {
        diff.deltas()
            .map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|path| self.root().join(path))
                    .ok_or(GitError::MissingDeltaPath)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{commit_file, setup_test_repo, stage_file};
    use super::super::Repository;
    use std::fs;

    #[test]
    fn clean_tree_has_no_changes() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        commit_file(&repo, "file.txt", "content")?;

        assert!(repo.modified_files()?.is_empty());

        Ok(())
    }

    #[test]
    fn detect_unstaged_modification() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        commit_file(&repo, "file.txt", "initial")?;

        fs::write(dir.path().join("file.txt"), "modified")?;

        assert_eq!(repo.unstaged_files()?, vec![repo.root().join("file.txt")]);
        assert!(repo.staged_files()?.is_empty());

        Ok(())
    }

    #[test]
    fn detect_staged_modification() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;
        commit_file(&repo, "file.txt", "initial")?;

        stage_file(&repo, "file.txt", "modified")?;

        assert!(repo.unstaged_files()?.is_empty());
        assert_eq!(repo.staged_files()?, vec![repo.root().join("file.txt")]);

        Ok(())
    }

    #[test]
    fn detect_staged_new_file_in_subdirectory() -> anyhow::Result<()> {
        let (_dir, repo) = setup_test_repo()?;

        stage_file(&repo, "deploy/olm-catalog/op/1.0.0/op.v1.0.0.yaml", "new")?;

        assert_eq!(
            repo.staged_files()?,
            vec![repo.root().join("deploy/olm-catalog/op/1.0.0/op.v1.0.0.yaml")]
        );

        Ok(())
    }

    #[test]
    fn detect_unstaged_deletion() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        commit_file(&repo, "file.txt", "content")?;

        fs::remove_file(dir.path().join("file.txt"))?;

        assert_eq!(repo.unstaged_files()?, vec![repo.root().join("file.txt")]);

        Ok(())
    }

    #[test]
    fn untracked_files_are_ignored() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;

        fs::write(dir.path().join("untracked.txt"), "content")?;

        assert!(repo.modified_files()?.is_empty());

        Ok(())
    }

    #[test]
    fn unstaged_listed_before_staged() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        commit_file(&repo, "a.txt", "a")?;
        commit_file(&repo, "b.txt", "b")?;

        stage_file(&repo, "b.txt", "b2")?;
        fs::write(dir.path().join("a.txt"), "a2")?;

        assert_eq!(
            repo.modified_files()?,
            vec![repo.root().join("a.txt"), repo.root().join("b.txt")]
        );

        Ok(())
    }

    #[test]
    fn file_changed_in_both_places_is_listed_twice() -> anyhow::Result<()> {
        let (dir, repo) = setup_test_repo()?;
        commit_file(&repo, "file.txt", "one")?;

        stage_file(&repo, "file.txt", "two")?;
        fs::write(dir.path().join("file.txt"), "three")?;

        let path = repo.root().join("file.txt");
        assert_eq!(repo.modified_files()?, vec![path.clone(), path]);

        Ok(())
    }

    #[test]
    fn unborn_branch_reports_indexed_files_as_staged() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        git2::Repository::init(dir.path())?;
        let repo = Repository::open(dir.path())?;

        stage_file(&repo, "first.txt", "content")?;

        assert_eq!(repo.staged_files()?, vec![repo.root().join("first.txt")]);

        Ok(())
    }
}
