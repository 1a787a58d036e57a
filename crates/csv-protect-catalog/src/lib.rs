mod config;
mod csv;
mod dev_channel;
mod error;
mod manifest;
mod paths;
mod walk;

pub const DEFAULT_CATALOG_DIR: &str = "deploy/olm-catalog";
pub const DEFAULT_DEV_CHANNEL: &str = "dev";
pub const CONFIG_FILE_NAME: &str = ".csv-protect.toml";
pub const PACKAGE_FILE_PATTERN: &str = "*.package.yaml";
pub const CSV_FILE_PATTERN: &str = "*.clusterserviceversion.yaml";

pub use config::{CatalogConfig, load_config, parse_config};
pub use csv::{
    ALM_EXAMPLES_ANNOTATION, ClusterServiceVersion, CsvMetadata, ExampleResources,
    parse_cluster_service_version, read_cluster_service_version, validate_example_resources,
};
pub use dev_channel::DevChannelInfo;
pub use error::CatalogError;
pub use manifest::{Channel, PackageManifest, parse_package_manifest, read_package_manifest};
pub use paths::{ProjectPaths, resolve_project_paths};
pub use walk::{find_files, list_csvs};

pub type Result<T> = std::result::Result<T, CatalogError>;
