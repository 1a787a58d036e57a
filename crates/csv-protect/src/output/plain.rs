use std::path::Path;

use csv_protect_catalog::{DevChannelInfo, ProjectPaths};
use csv_protect_operations::operations::{CheckReport, DevChannelOutput};
use csv_protect_operations::verification::{ValidatedCsv, Violation};

use super::OutputFormatter;

pub(crate) struct PlainTextFormatter;

impl PlainTextFormatter {
    fn relative<'a>(path: &'a Path, catalog_dir: &Path) -> &'a Path {
        path.strip_prefix(catalog_dir).unwrap_or(path)
    }

    fn format_validated(output: &mut String, validated: &ValidatedCsv, catalog_dir: &Path) {
        output.push_str(&format!(
            "validate CR examples defined in csv: {}\n",
            Self::relative(&validated.path, catalog_dir).display()
        ));
        output.push_str(&format!(
            "CR examples are validated ({} example(s))\n",
            validated.example_count
        ));
    }

    fn format_violation(output: &mut String, violation: &Violation, catalog_dir: &Path) {
        match violation {
            Violation::FrozenCsvModified { path } => {
                output.push_str(&format!("ERROR: modifying csv: {}\n", path.display()));
            }
            Violation::PromotedCsvModified { path, shared_with } => {
                output.push_str(&format!("ERROR: modifying csv: {}\n", path.display()));
                output.push_str(&format!(
                    "  already released on channel(s): {}\n",
                    shared_with.join(", ")
                ));
            }
            Violation::InvalidExamples { path, source } => {
                output.push_str(&format!(
                    "validate CR examples defined in csv: {}\n",
                    Self::relative(path, catalog_dir).display()
                ));
                output.push_str(&format!("ERROR: failed to validate csv: {}\n", path.display()));
                output.push_str(&format!("  {source}\n"));
                let mut cause = std::error::Error::source(source);
                while let Some(inner) = cause {
                    output.push_str(&format!("  caused by: {inner}\n"));
                    cause = std::error::Error::source(inner);
                }
            }
        }
    }
}

impl OutputFormatter for PlainTextFormatter {
    fn format_start(&self) -> String {
        "start to check csv files\n".to_string()
    }

    fn format_project(&self, paths: &ProjectPaths) -> String {
        format!("project dir: {}\n", paths.root.display())
    }

    fn format_dev_csv(&self, dev: &DevChannelInfo) -> String {
        format!("find dev csv: {}\n", dev.csv_name)
    }

    fn format_undefined_channel(&self, channel: &str) -> String {
        if channel == csv_protect_catalog::DEFAULT_DEV_CHANNEL {
            "ERROR: dev channel is not defined\n".to_string()
        } else {
            format!("ERROR: dev channel is not defined (looked for '{channel}')\n")
        }
    }

    fn format_success(&self, report: &CheckReport) -> String {
        let mut output = String::new();
        for validated in &report.result.validated {
            Self::format_validated(&mut output, validated, &report.paths.catalog_dir);
        }
        output.push_str("csv check passed\n");
        output
    }

    fn format_failure(&self, report: &CheckReport) -> String {
        let mut output = String::new();
        for validated in &report.result.validated {
            Self::format_validated(&mut output, validated, &report.paths.catalog_dir);
        }
        for violation in &report.result.violations {
            Self::format_violation(&mut output, violation, &report.paths.catalog_dir);
        }
        output
    }

    fn format_dev_channel(&self, output: &DevChannelOutput) -> String {
        let mut text = String::new();
        let catalog_dir = &output.paths.catalog_dir;

        text.push_str(&format!("package: {}\n", output.paths.package_file.display()));
        if let Some(name) = &output.manifest.package_name {
            text.push_str(&format!("package name: {name}\n"));
        }
        if let Some(default) = &output.manifest.default_channel {
            text.push_str(&format!("default channel: {default}\n"));
        }

        text.push_str("channels:\n");
        for channel in &output.manifest.channels {
            let marker = if channel.name == output.channel { "*" } else { " " };
            text.push_str(&format!(
                "  {marker} {}: {}\n",
                channel.name, channel.current_csv
            ));
        }

        match &output.dev {
            Some(dev) => {
                text.push_str(&format!("dev csv: {}\n", dev.csv_name));
                match &dev.csv_path {
                    Some(path) => {
                        text.push_str(&format!(
                            "dev csv file: {}\n",
                            Self::relative(path, catalog_dir).display()
                        ));
                    }
                    None => text.push_str("dev csv file: not found in catalog\n"),
                }
                if dev.is_new() {
                    text.push_str("status: new, may be edited\n");
                } else {
                    text.push_str(&format!(
                        "status: released on {}, frozen\n",
                        dev.shared_with.join(", ")
                    ));
                }
            }
            None => text.push_str(&self.format_undefined_channel(&output.channel)),
        }

        text
    }
}
