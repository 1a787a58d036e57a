use std::path::{Path, PathBuf};

use csv_protect_catalog::{
    CatalogConfig, ExampleResources, PackageManifest, ProjectPaths, list_csvs, load_config,
    read_package_manifest, resolve_project_paths, validate_example_resources,
};

use crate::Result;
use crate::traits::{CatalogProvider, ExampleReader};

pub struct FileSystemCatalogProvider;

impl FileSystemCatalogProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for FileSystemCatalogProvider {
    fn load_config(&self, root: &Path) -> Result<CatalogConfig> {
        Ok(load_config(root)?)
    }

    fn resolve_paths(&self, root: &Path, config: &CatalogConfig) -> Result<ProjectPaths> {
        Ok(resolve_project_paths(root, config)?)
    }

    fn load_manifest(&self, package_file: &Path) -> Result<PackageManifest> {
        Ok(read_package_manifest(package_file)?)
    }

    fn list_csvs(&self, catalog_dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(list_csvs(catalog_dir)?)
    }
}

impl ExampleReader for FileSystemCatalogProvider {
    fn example_resources(&self, csv_path: &Path) -> Result<ExampleResources> {
        Ok(validate_example_resources(csv_path)?)
    }
}
