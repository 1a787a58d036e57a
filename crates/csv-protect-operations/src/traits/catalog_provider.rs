use std::path::{Path, PathBuf};

use csv_protect_catalog::{CatalogConfig, PackageManifest, ProjectPaths};

use crate::Result;

pub trait CatalogProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded.
    fn load_config(&self, root: &Path) -> Result<CatalogConfig>;

    /// # Errors
    ///
    /// Returns an error if the root does not exist or holds no package manifest.
    fn resolve_paths(&self, root: &Path, config: &CatalogConfig) -> Result<ProjectPaths>;

    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    fn load_manifest(&self, package_file: &Path) -> Result<PackageManifest>;

    /// # Errors
    ///
    /// Returns an error if the catalog directory cannot be listed.
    fn list_csvs(&self, catalog_dir: &Path) -> Result<Vec<PathBuf>>;
}
