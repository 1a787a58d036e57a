use csv_protect_catalog::{DevChannelInfo, ProjectPaths};
use csv_protect_operations::operations::{CheckReport, DevChannelOutput};

pub(crate) trait OutputFormatter {
    fn format_start(&self) -> String;
    fn format_project(&self, paths: &ProjectPaths) -> String;
    fn format_dev_csv(&self, dev: &DevChannelInfo) -> String;
    fn format_undefined_channel(&self, channel: &str) -> String;
    fn format_success(&self, report: &CheckReport) -> String;
    fn format_failure(&self, report: &CheckReport) -> String;
    fn format_dev_channel(&self, output: &DevChannelOutput) -> String;
}
