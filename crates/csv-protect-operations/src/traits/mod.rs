mod catalog_provider;
mod change_set_provider;
mod example_reader;

pub use catalog_provider::CatalogProvider;
pub use change_set_provider::ChangeSetProvider;
pub use example_reader::ExampleReader;
