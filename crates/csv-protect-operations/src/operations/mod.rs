mod check;
mod dev_channel;

use std::path::{Path, PathBuf};

use csv_protect_catalog::CatalogConfig;

use crate::Result;
use crate::traits::CatalogProvider;

pub use check::{CheckOperation, CheckOutcome, CheckReport, CheckTarget};
pub use dev_channel::{DevChannelOperation, DevChannelOutput};

/// Command-line overrides applied on top of the project's config file.
#[derive(Debug, Clone, Default)]
pub struct CatalogInput {
    pub catalog_dir: Option<PathBuf>,
    pub dev_channel: Option<String>,
}

fn effective_config<C: CatalogProvider>(
    provider: &C,
    root: &Path,
    input: &CatalogInput,
) -> Result<CatalogConfig> {
    let mut config = provider.load_config(root)?;

    if let Some(catalog_dir) = &input.catalog_dir {
        config = config.with_catalog_dir(catalog_dir.clone());
    }
    if let Some(dev_channel) = &input.dev_channel {
        config = config.with_dev_channel(dev_channel.clone());
    }

    Ok(config)
}
