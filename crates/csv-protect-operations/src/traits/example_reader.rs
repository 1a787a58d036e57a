use std::path::Path;

use csv_protect_catalog::ExampleResources;

use crate::Result;

pub trait ExampleReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the CSV cannot be read or its `alm-examples`
    /// annotation is missing or not valid JSON.
    fn example_resources(&self, csv_path: &Path) -> Result<ExampleResources>;
}
