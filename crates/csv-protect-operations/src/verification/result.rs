use std::path::{Path, PathBuf};

use crate::OperationError;

#[derive(Debug)]
pub enum Violation {
    /// The dev CSV was edited after another channel started serving it.
    PromotedCsvModified {
        path: PathBuf,
        shared_with: Vec<String>,
    },
    /// A CSV other than the dev CSV was edited.
    FrozenCsvModified { path: PathBuf },
    /// The dev CSV's example resources could not be read or decoded.
    InvalidExamples {
        path: PathBuf,
        source: OperationError,
    },
}

impl Violation {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::PromotedCsvModified { path, .. }
            | Self::FrozenCsvModified { path }
            | Self::InvalidExamples { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCsv {
    pub path: PathBuf,
    pub example_count: usize,
}

#[derive(Debug)]
pub struct VerificationResult {
    pub changed_csvs: Vec<PathBuf>,
    pub validated: Vec<ValidatedCsv>,
    pub violations: Vec<Violation>,
}

impl VerificationResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.violations.is_empty()
    }
}
