use std::path::PathBuf;

use csv_protect_catalog::{DevChannelInfo, ProjectPaths};

pub struct VerificationContext {
    pub paths: ProjectPaths,
    pub dev: DevChannelInfo,
    /// Catalog CSVs that also appear in the change set, in catalog order.
    pub changed_csvs: Vec<PathBuf>,
}
