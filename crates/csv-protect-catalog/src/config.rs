use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{CONFIG_FILE_NAME, CatalogError, DEFAULT_CATALOG_DIR, DEFAULT_DEV_CHANNEL, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    catalog_dir: Option<PathBuf>,
    dev_channel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    catalog_dir: PathBuf,
    dev_channel: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from(DEFAULT_CATALOG_DIR),
            dev_channel: String::from(DEFAULT_DEV_CHANNEL),
        }
    }
}

impl CatalogConfig {
    /// Directory, relative to the project root, searched for the package manifest.
    #[must_use]
    pub fn catalog_dir(&self) -> &Path {
        &self.catalog_dir
    }

    #[must_use]
    pub fn dev_channel(&self) -> &str {
        &self.dev_channel
    }

    #[must_use]
    pub fn with_catalog_dir(mut self, catalog_dir: impl Into<PathBuf>) -> Self {
        self.catalog_dir = catalog_dir.into();
        self
    }

    #[must_use]
    pub fn with_dev_channel(mut self, dev_channel: impl Into<String>) -> Self {
        self.dev_channel = dev_channel.into();
        self
    }
}

/// Loads `.csv-protect.toml` from the project root, falling back to defaults
/// when the file does not exist.
///
/// # Errors
///
/// Returns `CatalogError::ConfigRead` if the file exists but cannot be read,
/// or `CatalogError::ConfigParse` if it is not valid.
pub fn load_config(root: &Path) -> Result<CatalogConfig> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(CatalogConfig::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| CatalogError::ConfigRead {
        path: path.clone(),
        source,
    })?;

    parse_config(&content, &path)
}

/// # Errors
///
/// Returns `CatalogError::ConfigParse` for malformed TOML or unknown keys,
/// and `CatalogError::InvalidField` for an empty `dev-channel`.
pub fn parse_config(content: &str, path: &Path) -> Result<CatalogConfig> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| CatalogError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config = CatalogConfig::default();

    if let Some(catalog_dir) = file.catalog_dir {
        config = config.with_catalog_dir(catalog_dir);
    }

    if let Some(dev_channel) = file.dev_channel {
        if dev_channel.trim().is_empty() {
            return Err(CatalogError::InvalidField {
                path: path.to_path_buf(),
                field: "dev-channel",
                expected: "a non-empty string",
            });
        }
        config = config.with_dev_channel(dev_channel);
    }

    Ok(config)
}
