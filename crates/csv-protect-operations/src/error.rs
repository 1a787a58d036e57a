use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Catalog(#[from] csv_protect_catalog::CatalogError),

    #[error(transparent)]
    Git(#[from] csv_protect_git::GitError),
}

pub type Result<T> = std::result::Result<T, OperationError>;
