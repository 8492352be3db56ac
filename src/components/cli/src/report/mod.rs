mod invoke;
mod parse;
mod supported_targets;

use layout_report::ReportOptions;

#[derive(Clone, Debug)]
pub struct ReportCommand {
    pub options: ReportOptions,
}
