use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv_protect_catalog::{
    CatalogConfig, CatalogError, Channel, ExampleResources, PACKAGE_FILE_PATTERN,
    PackageManifest, ProjectPaths,
};
use csv_protect_git::GitError;

use crate::Result;
use crate::traits::{CatalogProvider, ChangeSetProvider, ExampleReader};

#[derive(Clone)]
pub struct MockCatalogProvider {
    paths: ProjectPaths,
    has_package: bool,
    catalog_readable: bool,
    channels: Vec<Channel>,
    csvs: Vec<PathBuf>,
    examples: HashMap<PathBuf, String>,
}

impl MockCatalogProvider {
    #[must_use]
    pub fn new() -> Self {
        let root = PathBuf::from("/mock/project");
        let catalog_dir = root.join("deploy/olm-catalog/foo");
        Self {
            paths: ProjectPaths {
                package_file: catalog_dir.join("foo.package.yaml"),
                catalog_dir,
                root,
            },
            has_package: true,
            catalog_readable: true,
            channels: Vec::new(),
            csvs: Vec::new(),
            examples: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_channels(mut self, channels: &[(&str, &str)]) -> Self {
        self.channels = channels
            .iter()
            .map(|(name, csv)| Channel {
                name: (*name).to_string(),
                current_csv: (*csv).to_string(),
            })
            .collect();
        self
    }

    #[must_use]
    pub fn with_csvs(mut self, csvs: Vec<PathBuf>) -> Self {
        self.csvs = csvs;
        self
    }

    /// Registers the raw `alm-examples` text for a CSV.
    #[must_use]
    pub fn with_examples(mut self, csv: PathBuf, raw: &str) -> Self {
        self.examples.insert(csv, raw.to_string());
        self
    }

    #[must_use]
    pub fn without_package(mut self) -> Self {
        self.has_package = false;
        self
    }

    /// Makes `list_csvs` fail as if a catalog subdirectory could not be read.
    #[must_use]
    pub fn with_unreadable_catalog(mut self) -> Self {
        self.catalog_readable = false;
        self
    }
}

impl Default for MockCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for MockCatalogProvider {
    fn load_config(&self, _root: &Path) -> Result<CatalogConfig> {
        Ok(CatalogConfig::default())
    }

    fn resolve_paths(&self, _root: &Path, config: &CatalogConfig) -> Result<ProjectPaths> {
        if !self.has_package {
            return Err(CatalogError::PackageNotFound {
                search_dir: self.paths.root.join(config.catalog_dir()),
                pattern: PACKAGE_FILE_PATTERN,
            }
            .into());
        }
        Ok(self.paths.clone())
    }

    fn load_manifest(&self, _package_file: &Path) -> Result<PackageManifest> {
        Ok(PackageManifest {
            package_name: Some("foo".to_string()),
            default_channel: None,
            channels: self.channels.clone(),
        })
    }

    fn list_csvs(&self, catalog_dir: &Path) -> Result<Vec<PathBuf>> {
        if !self.catalog_readable {
            return Err(CatalogError::DirectoryRead {
                path: catalog_dir.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .into());
        }
        Ok(self.csvs.clone())
    }
}

impl ExampleReader for MockCatalogProvider {
    fn example_resources(&self, csv_path: &Path) -> Result<ExampleResources> {
        let raw = self
            .examples
            .get(csv_path)
            .ok_or_else(|| CatalogError::MissingField {
                path: csv_path.to_path_buf(),
                field: "metadata.annotations.alm-examples",
            })?;
        Ok(ExampleResources::parse(raw, csv_path)?)
    }
}

pub struct MockChangeSetProvider {
    changed_files: Vec<PathBuf>,
    fail: bool,
}

impl MockChangeSetProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changed_files: Vec::new(),
            fail: false,
        }
    }

    #[must_use]
    pub fn with_changed_files(mut self, files: Vec<PathBuf>) -> Self {
        self.changed_files = files;
        self
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl Default for MockChangeSetProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeSetProvider for MockChangeSetProvider {
    fn changed_files(&self, project_root: &Path) -> Result<Vec<PathBuf>> {
        if self.fail {
            return Err(GitError::NotARepository {
                path: project_root.to_path_buf(),
            }
            .into());
        }
        Ok(self.changed_files.clone())
    }
}
