mod check;
mod dev_channel;

use std::path::Path;

use clap::Subcommand;

use crate::GlobalOptions;
use crate::error::Result;

#[derive(Subcommand, Default)]
pub(crate) enum Commands {
    /// Fail if a CSV other than the new dev-channel CSV has staged or unstaged changes
    #[default]
    Check,
    /// Show how the dev channel resolves against the catalog
    DevChannel,
}

impl Commands {
    pub(crate) fn execute(self, root: &Path, options: &GlobalOptions) -> Result<()> {
        match self {
            Self::Check => check::run(root, options),
            Self::DevChannel => dev_channel::run(root, options),
        }
    }
}
