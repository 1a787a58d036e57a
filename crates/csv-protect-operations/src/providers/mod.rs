mod catalog;
mod git;

pub use catalog::FileSystemCatalogProvider;
pub use git::Git2Provider;
