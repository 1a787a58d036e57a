use std::path::Path;

use csv_protect_catalog::{DevChannelInfo, PackageManifest, ProjectPaths};

use super::{CatalogInput, effective_config};
use crate::Result;
use crate::traits::CatalogProvider;

#[derive(Debug)]
pub struct DevChannelOutput {
    pub paths: ProjectPaths,
    pub manifest: PackageManifest,
    pub channel: String,
    /// `None` when the manifest has no usable entry for `channel`.
    pub dev: Option<DevChannelInfo>,
}

/// Read-only view of how the dev channel resolves against the catalog.
pub struct DevChannelOperation<C> {
    catalog_provider: C,
}

impl<C: CatalogProvider> DevChannelOperation<C> {
    pub fn new(catalog_provider: C) -> Self {
        Self { catalog_provider }
    }

    /// # Errors
    ///
    /// Returns an error if the catalog cannot be located or read.
    pub fn execute(&self, root: &Path, input: &CatalogInput) -> Result<DevChannelOutput> {
        let config = effective_config(&self.catalog_provider, root, input)?;
        let paths = self.catalog_provider.resolve_paths(root, &config)?;
        let manifest = self.catalog_provider.load_manifest(&paths.package_file)?;
        let csvs = self.catalog_provider.list_csvs(&paths.catalog_dir)?;

        let dev =
            DevChannelInfo::resolve(&manifest, config.dev_channel()).map(|info| info.locate(&csvs));

        Ok(DevChannelOutput {
            paths,
            manifest,
            channel: config.dev_channel().to_string(),
            dev,
        })
    }
}
