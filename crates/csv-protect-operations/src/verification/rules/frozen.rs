use super::{VerificationContext, VerificationResult, VerificationRule};
use crate::Result;
use crate::verification::Violation;

/// Only the dev CSV may change, and only while no other channel serves it.
pub struct FrozenCsvRule;

impl VerificationRule for FrozenCsvRule {
    fn check(&self, context: &VerificationContext, result: &mut VerificationResult) -> Result<()> {
        for path in &context.changed_csvs {
            if !context.dev.is_dev_csv(path) {
                result
                    .violations
                    .push(Violation::FrozenCsvModified { path: path.clone() });
            } else if !context.dev.is_new() {
                result.violations.push(Violation::PromotedCsvModified {
                    path: path.clone(),
                    shared_with: context.dev.shared_with.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use csv_protect_catalog::{DevChannelInfo, ProjectPaths};

    use super::*;
    use crate::verification::VerificationEngine;

    fn dev_csv() -> PathBuf {
        PathBuf::from("/repo/deploy/olm-catalog/foo/foo-v2.clusterserviceversion.yaml")
    }

    fn released_csv() -> PathBuf {
        PathBuf::from("/repo/deploy/olm-catalog/foo/foo-v1.clusterserviceversion.yaml")
    }

    fn context(shared_with: &[&str], changed: Vec<PathBuf>) -> VerificationContext {
        VerificationContext {
            paths: ProjectPaths {
                root: PathBuf::from("/repo"),
                catalog_dir: PathBuf::from("/repo/deploy/olm-catalog/foo"),
                package_file: PathBuf::from("/repo/deploy/olm-catalog/foo/foo.package.yaml"),
            },
            dev: DevChannelInfo {
                channel: "dev".to_string(),
                csv_name: "foo-v2".to_string(),
                csv_path: Some(dev_csv()),
                shared_with: shared_with.iter().map(ToString::to_string).collect(),
            },
            changed_csvs: changed,
        }
    }

    fn run(context: &VerificationContext) -> VerificationResult {
        let mut engine = VerificationEngine::new();
        engine.add_rule(&FrozenCsvRule);
        engine.verify(context).expect("rule never errors")
    }

    #[test]
    fn new_dev_csv_may_change() {
        let result = run(&context(&[], vec![dev_csv()]));

        assert!(result.is_success());
    }

    #[test]
    fn promoted_dev_csv_is_rejected() {
        let result = run(&context(&["stable"], vec![dev_csv()]));

        assert_eq!(result.violations.len(), 1);
        match &result.violations[0] {
            Violation::PromotedCsvModified { path, shared_with } => {
                assert_eq!(path, &dev_csv());
                assert_eq!(shared_with, &vec!["stable".to_string()]);
            }
            other => panic!("Expected PromotedCsvModified, got {other:?}"),
        }
    }

    #[test]
    fn other_csv_is_rejected_even_when_dev_is_new() {
        let result = run(&context(&[], vec![released_csv()]));

        assert!(matches!(
            result.violations.as_slice(),
            [Violation::FrozenCsvModified { .. }]
        ));
    }

    #[test]
    fn other_csv_is_rejected_when_dev_is_promoted() {
        let result = run(&context(&["stable"], vec![released_csv()]));

        assert!(matches!(
            result.violations.as_slice(),
            [Violation::FrozenCsvModified { .. }]
        ));
    }

    #[test]
    fn every_offending_csv_is_reported() {
        let result = run(&context(&["stable"], vec![released_csv(), dev_csv()]));

        let released = released_csv();
        let dev = dev_csv();
        let paths: Vec<_> = result.violations.iter().map(Violation::path).collect();
        assert_eq!(paths, vec![released.as_path(), dev.as_path()]);
    }

    #[test]
    fn unresolved_dev_path_rejects_every_change() {
        let mut ctx = context(&[], vec![dev_csv()]);
        ctx.dev.csv_path = None;

        let result = run(&ctx);

        assert!(!result.is_success());
    }
}
