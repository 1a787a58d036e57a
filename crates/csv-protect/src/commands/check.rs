use std::path::Path;

use csv_protect_operations::operations::{CheckOperation, CheckOutcome};
use csv_protect_operations::providers::{FileSystemCatalogProvider, Git2Provider};
use tracing::debug;

use crate::GlobalOptions;
use crate::error::{CliError, Result};
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) fn run(root: &Path, options: &GlobalOptions) -> Result<()> {
    let formatter = PlainTextFormatter;

    if !options.quiet {
        print!("{}", formatter.format_start());
    }

    let operation = CheckOperation::new(
        FileSystemCatalogProvider::new(),
        Git2Provider::new(),
        FileSystemCatalogProvider::new(),
    );

    let target = operation.prepare(root, &options.catalog_input())?;
    debug!(root = %target.paths.root.display(), "running csv check");
    if !options.quiet {
        print!("{}", formatter.format_project(&target.paths));
    }

    match operation.run(target)? {
        CheckOutcome::DevChannelUndefined { channel, .. } => {
            if !options.quiet {
                print!("{}", formatter.format_undefined_channel(&channel));
            }
            Err(CliError::DevChannelUndefined { channel })
        }
        CheckOutcome::Passed(report) => {
            if !options.quiet {
                print!("{}", formatter.format_dev_csv(&report.dev));
                print!("{}", formatter.format_success(&report));
            }
            Ok(())
        }
        CheckOutcome::Failed(report) => {
            if !options.quiet {
                print!("{}", formatter.format_dev_csv(&report.dev));
                print!("{}", formatter.format_failure(&report));
            }
            Err(CliError::PolicyViolation {
                count: report.result.violations.len(),
            })
        }
    }
}
