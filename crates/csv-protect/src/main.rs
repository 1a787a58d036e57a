mod commands;
mod error;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser};
use csv_protect_operations::operations::CatalogInput;

use crate::commands::Commands;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "csv-protect")]
#[command(version)]
#[command(
    about = "Reject edits to OLM ClusterServiceVersions other than the new dev-channel CSV",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    /// Defaults to `check`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
pub(crate) struct GlobalOptions {
    /// Project root (default: current directory)
    #[arg(long = "path", short = 'C', global = true)]
    pub(crate) path: Option<PathBuf>,

    /// Directory under the project root searched for the package manifest
    #[arg(long, global = true)]
    pub(crate) catalog_dir: Option<PathBuf>,

    /// Name of the channel whose CSV may be edited
    #[arg(long, global = true)]
    pub(crate) dev_channel: Option<String>,

    /// Suppress progress output
    #[arg(long, short = 'q', global = true)]
    pub(crate) quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,
}

impl GlobalOptions {
    pub(crate) fn catalog_input(&self) -> CatalogInput {
        CatalogInput {
            catalog_dir: self.catalog_dir.clone(),
            dev_channel: self.dev_channel.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.options.verbose);

    let root = match resolve_root(cli.options.path.clone()) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    let command = cli.command.unwrap_or_default();

    if let Err(e) = command.execute(&root, &cli.options) {
        if !cli.options.quiet {
            print_error(&e);
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
