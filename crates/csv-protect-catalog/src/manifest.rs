use std::path::Path;

use serde::Deserialize;

use crate::{CatalogError, Result};

/// An OLM package manifest (`*.package.yaml`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManifest {
    pub package_name: Option<String>,
    pub default_channel: Option<String>,
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Channel {
    pub name: String,
    #[serde(rename = "currentCSV")]
    pub current_csv: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPackageManifest {
    package_name: Option<String>,
    default_channel: Option<String>,
    channels: Option<Vec<Channel>>,
}

impl PackageManifest {
    /// Looks up a channel by name. If the name is declared more than once the
    /// last declaration wins.
    #[must_use]
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().rev().find(|channel| channel.name == name)
    }

    /// Channels other than `excluded` whose `currentCSV` is `csv_name`.
    pub fn channels_sharing<'a>(
        &'a self,
        csv_name: &'a str,
        excluded: &'a str,
    ) -> impl Iterator<Item = &'a Channel> + 'a {
        self.channels
            .iter()
            .filter(move |channel| channel.name != excluded && channel.current_csv == csv_name)
    }
}

/// # Errors
///
/// Returns `CatalogError::FileRead` if the file cannot be read, or any error
/// from [`parse_package_manifest`].
pub fn read_package_manifest(path: &Path) -> Result<PackageManifest> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_package_manifest(&content, path)
}

/// # Errors
///
/// Returns `CatalogError::YamlParse` for malformed YAML or a malformed channel
/// entry, and `CatalogError::MissingField` if `channels` is absent.
pub fn parse_package_manifest(content: &str, path: &Path) -> Result<PackageManifest> {
    let raw: RawPackageManifest =
        serde_yml::from_str(content).map_err(|source| CatalogError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?;

    let channels = raw.channels.ok_or_else(|| CatalogError::MissingField {
        path: path.to_path_buf(),
        field: "channels",
    })?;

    Ok(PackageManifest {
        package_name: raw.package_name,
        default_channel: raw.default_channel,
        channels,
    })
}
