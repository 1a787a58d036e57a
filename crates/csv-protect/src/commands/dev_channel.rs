use std::path::Path;

use csv_protect_operations::operations::DevChannelOperation;
use csv_protect_operations::providers::FileSystemCatalogProvider;

use crate::GlobalOptions;
use crate::error::{CliError, Result};
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) fn run(root: &Path, options: &GlobalOptions) -> Result<()> {
    let operation = DevChannelOperation::new(FileSystemCatalogProvider::new());
    let output = operation.execute(root, &options.catalog_input())?;

    if !options.quiet {
        print!("{}", PlainTextFormatter.format_dev_channel(&output));
    }

    if output.dev.is_none() {
        return Err(CliError::DevChannelUndefined {
            channel: output.channel,
        });
    }
    Ok(())
}
