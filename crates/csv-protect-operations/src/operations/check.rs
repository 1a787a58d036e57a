use std::path::Path;

use csv_protect_catalog::{CatalogConfig, DevChannelInfo, ProjectPaths};
use tracing::{debug, info};

use super::{CatalogInput, effective_config};
use crate::Result;
use crate::traits::{CatalogProvider, ChangeSetProvider, ExampleReader};
use crate::verification::rules::{ExampleResourcesRule, FrozenCsvRule};
use crate::verification::{VerificationContext, VerificationEngine, VerificationResult};

#[derive(Debug)]
pub struct CheckReport {
    pub paths: ProjectPaths,
    pub dev: DevChannelInfo,
    pub result: VerificationResult,
}

/// A located project whose change set has not been collected yet.
#[derive(Debug)]
pub struct CheckTarget {
    pub paths: ProjectPaths,
    config: CatalogConfig,
}

#[derive(Debug)]
pub enum CheckOutcome {
    DevChannelUndefined { paths: ProjectPaths, channel: String },
    Passed(CheckReport),
    Failed(CheckReport),
}

pub struct CheckOperation<C, G, R> {
    catalog_provider: C,
    change_set_provider: G,
    example_reader: R,
}

impl<C, G, R> CheckOperation<C, G, R>
where
    C: CatalogProvider,
    G: ChangeSetProvider,
    R: ExampleReader,
{
    pub fn new(catalog_provider: C, change_set_provider: G, example_reader: R) -> Self {
        Self {
            catalog_provider,
            change_set_provider,
            example_reader,
        }
    }

    /// Loads the config and locates the catalog. Git is not consulted yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or no package manifest can
    /// be found.
    pub fn prepare(&self, root: &Path, input: &CatalogInput) -> Result<CheckTarget> {
        let config = effective_config(&self.catalog_provider, root, input)?;
        let paths = self.catalog_provider.resolve_paths(root, &config)?;
        info!(root = %paths.root.display(), "project resolved");

        Ok(CheckTarget { paths, config })
    }

    /// # Errors
    ///
    /// Returns an error if the catalog cannot be located or read, or if the
    /// change set cannot be collected. Policy violations are reported through
    /// [`CheckOutcome`], not as errors.
    pub fn execute(&self, root: &Path, input: &CatalogInput) -> Result<CheckOutcome> {
        let target = self.prepare(root, input)?;
        self.run(target)
    }

    /// # Errors
    ///
    /// Returns an error if the change set cannot be collected or the catalog
    /// cannot be read.
    pub fn run(&self, target: CheckTarget) -> Result<CheckOutcome> {
        let CheckTarget { paths, config } = target;

        let changed_files = self.change_set_provider.changed_files(&paths.root)?;
        debug!(count = changed_files.len(), "collected change set");

        let manifest = self.catalog_provider.load_manifest(&paths.package_file)?;
        let Some(dev) = DevChannelInfo::resolve(&manifest, config.dev_channel()) else {
            return Ok(CheckOutcome::DevChannelUndefined {
                paths,
                channel: config.dev_channel().to_string(),
            });
        };

        let csvs = self.catalog_provider.list_csvs(&paths.catalog_dir)?;
        let dev = dev.locate(&csvs);
        info!(csv = %dev.csv_name, is_new = dev.is_new(), "dev channel resolved");

        let changed_csvs: Vec<_> = csvs
            .into_iter()
            .filter(|csv| changed_files.contains(csv))
            .collect();
        for csv in &changed_csvs {
            debug!(path = %csv.display(), "csv modified");
        }

        let context = VerificationContext {
            paths,
            dev,
            changed_csvs,
        };

        let examples_rule = ExampleResourcesRule::new(&self.example_reader);

        let mut engine = VerificationEngine::new();
        engine.add_rule(&FrozenCsvRule);
        engine.add_rule(&examples_rule);

        let result = engine.verify(&context)?;

        let report = CheckReport {
            paths: context.paths,
            dev: context.dev,
            result,
        };

        if report.result.is_success() {
            Ok(CheckOutcome::Passed(report))
        } else {
            Ok(CheckOutcome::Failed(report))
        }
    }
}
