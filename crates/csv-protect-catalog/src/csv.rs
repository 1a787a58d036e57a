use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{CatalogError, Result};

pub const ALM_EXAMPLES_ANNOTATION: &str = "alm-examples";

const ALM_EXAMPLES_FIELD: &str = "metadata.annotations.alm-examples";

/// The parts of a ClusterServiceVersion this tool reads. Everything else in
/// the document is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusterServiceVersion {
    #[serde(default)]
    pub metadata: Option<CsvMetadata>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CsvMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub annotations: Option<IndexMap<String, serde_yml::Value>>,
}

impl ClusterServiceVersion {
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&serde_yml::Value> {
        self.metadata
            .as_ref()
            .and_then(|metadata| metadata.annotations.as_ref())
            .and_then(|annotations| annotations.get(key))
    }

    /// The raw `alm-examples` annotation.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingField` if the annotation is absent and
    /// `CatalogError::InvalidField` if it is not a string.
    pub fn alm_examples(&self, path: &Path) -> Result<&str> {
        let value = self
            .annotation(ALM_EXAMPLES_ANNOTATION)
            .ok_or_else(|| CatalogError::MissingField {
                path: path.to_path_buf(),
                field: ALM_EXAMPLES_FIELD,
            })?;

        value.as_str().ok_or_else(|| CatalogError::InvalidField {
            path: path.to_path_buf(),
            field: ALM_EXAMPLES_FIELD,
            expected: "a string containing JSON",
        })
    }
}

/// Example custom resources decoded from `alm-examples`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleResources(serde_json::Value);

impl ExampleResources {
    /// # Errors
    ///
    /// Returns `CatalogError::ExamplesParse` if `raw` is not valid JSON.
    pub fn parse(raw: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(raw)
            .map(Self)
            .map_err(|source| CatalogError::ExamplesParse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Number of example resources: the array length, or 1 for a single object.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.0 {
            serde_json::Value::Array(items) => items.len(),
            _ => 1,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// # Errors
///
/// Returns `CatalogError::FileRead` if the file cannot be read, or any error
/// from [`parse_cluster_service_version`].
pub fn read_cluster_service_version(path: &Path) -> Result<ClusterServiceVersion> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cluster_service_version(&content, path)
}

/// # Errors
///
/// Returns `CatalogError::YamlParse` if the content is not a YAML mapping of
/// the expected shape.
pub fn parse_cluster_service_version(content: &str, path: &Path) -> Result<ClusterServiceVersion> {
    serde_yml::from_str(content).map_err(|source| CatalogError::YamlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a CSV file and checks that its `alm-examples` annotation is
/// well-formed JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the annotation is
/// missing or not a string, or the annotation is not valid JSON.
pub fn validate_example_resources(path: &Path) -> Result<ExampleResources> {
    let csv = read_cluster_service_version(path)?;
    ExampleResources::parse(csv.alm_examples(path)?, path)
}
