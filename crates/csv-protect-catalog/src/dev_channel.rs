use std::path::{Path, PathBuf};

use crate::PackageManifest;

/// The CSV currently published on the editable channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevChannelInfo {
    pub channel: String,
    pub csv_name: String,
    /// First catalog CSV whose path contains `csv_name`.
    pub csv_path: Option<PathBuf>,
    /// Other channels whose `currentCSV` is also `csv_name`.
    pub shared_with: Vec<String>,
}

impl DevChannelInfo {
    /// Returns `None` when the manifest has no channel named `channel`, or
    /// when that channel's `currentCSV` is empty. The CSV file is attached
    /// afterwards with [`DevChannelInfo::locate`].
    #[must_use]
    pub fn resolve(manifest: &PackageManifest, channel: &str) -> Option<Self> {
        let csv_name = manifest
            .channel(channel)
            .map(|dev| dev.current_csv.as_str())
            .filter(|name| !name.is_empty())?;

        let shared_with = manifest
            .channels_sharing(csv_name, channel)
            .map(|other| other.name.clone())
            .collect();

        Some(Self {
            channel: channel.to_string(),
            csv_name: csv_name.to_string(),
            csv_path: None,
            shared_with,
        })
    }

    /// Picks the first of `csv_paths` whose path contains the CSV name.
    ///
    /// Matching is by substring, so `op.v1.1` also matches
    /// `op.v1.10.clusterserviceversion.yaml` if that file sorts first.
    #[must_use]
    pub fn locate(mut self, csv_paths: &[PathBuf]) -> Self {
        self.csv_path = csv_paths
            .iter()
            .find(|path| path.to_string_lossy().contains(self.csv_name.as_str()))
            .cloned();
        self
    }

    /// True when no released channel points at this CSV yet.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.shared_with.is_empty()
    }

    #[must_use]
    pub fn is_dev_csv(&self, path: &Path) -> bool {
        self.csv_path.as_deref() == Some(path)
    }
}
