use tracing::debug;

use super::{VerificationContext, VerificationResult, VerificationRule};
use crate::Result;
use crate::traits::ExampleReader;
use crate::verification::{ValidatedCsv, Violation};

/// Changes to an editable dev CSV must keep its `alm-examples` valid JSON.
pub struct ExampleResourcesRule<'a, R: ExampleReader> {
    reader: &'a R,
}

impl<'a, R: ExampleReader> ExampleResourcesRule<'a, R> {
    #[must_use]
    pub fn new(reader: &'a R) -> Self {
        Self { reader }
    }
}

impl<R: ExampleReader> VerificationRule for ExampleResourcesRule<'_, R> {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        if !context.dev.is_new() {
            return Ok(());
        }

        for path in context
            .changed_csvs
            .iter()
            .filter(|path| context.dev.is_dev_csv(path))
        {
            match self.reader.example_resources(path) {
                Ok(examples) => {
                    debug!(path = %path.display(), count = examples.len(), "example resources parsed");
                    result.validated.push(ValidatedCsv {
                        path: path.clone(),
                        example_count: examples.len(),
                    });
                }
                Err(source) => result.violations.push(Violation::InvalidExamples {
                    path: path.clone(),
                    source,
                }),
            }
        }

        Ok(())
    }
}
