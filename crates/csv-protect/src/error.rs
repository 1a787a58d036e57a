use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("csv check could not run")]
    Operation(#[from] csv_protect_operations::OperationError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("channel '{channel}' is not defined in the package manifest")]
    DevChannelUndefined { channel: String },

    #[error("{count} csv policy violation(s)")]
    PolicyViolation { count: usize },
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::CliError;

    #[test]
    fn dev_channel_error_names_channel() {
        let err = CliError::DevChannelUndefined {
            channel: "dev".to_string(),
        };

        assert!(err.to_string().contains("'dev'"));
    }

    #[test]
    fn policy_violation_reports_count() {
        let err = CliError::PolicyViolation { count: 2 };

        assert!(err.to_string().starts_with('2'));
    }

    #[test]
    fn operation_error_has_source_chain() {
        let op_err: csv_protect_operations::OperationError =
            csv_protect_catalog::CatalogError::PackageNotFound {
                search_dir: PathBuf::from("/repo/deploy/olm-catalog"),
                pattern: csv_protect_catalog::PACKAGE_FILE_PATTERN,
            }
            .into();
        let cli_err: CliError = op_err.into();

        let source = std::error::Error::source(&cli_err).expect("has source");

        assert!(source.to_string().contains("/repo/deploy/olm-catalog"));
    }

    #[test]
    fn current_dir_error_keeps_io_source() {
        let err = CliError::CurrentDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));

        assert!(std::error::Error::source(&err).is_some());
    }
}
