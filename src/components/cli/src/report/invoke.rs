use super::{ReportCommand, supported_targets::warn_if_unsupported_target};
use crate::Invoke;
use diagnostics::{Diagnostics, ErrorDiagnostic};
use layout_report::{LayoutReporter, LayoutSource, ReportOptions, render};
use std::io::Write;

impl Invoke for ReportCommand {
    fn invoke(self) -> Result<(), ()> {
        let ReportCommand { options } = self;
        let diagnostics = Diagnostics::new(options.diagnostic_flags.clone());
        let mut stdout = std::io::stdout().lock();

        report(&options, &mut stdout, &diagnostics)
    }
}

fn report(
    options: &ReportOptions,
    w: &mut impl Write,
    diagnostics: &Diagnostics,
) -> Result<(), ()> {
    if let LayoutSource::Analytic(target) = &options.source {
        warn_if_unsupported_target(target, diagnostics);
    }

    let reporter = LayoutReporter::new(options, diagnostics);

    render(w, &reporter.report()).map_err(|err| {
        diagnostics.push(ErrorDiagnostic::plain(format!(
            "Failed to write report: {}",
            err
        )));
    })?;

    reporter.warn_padding();
    Ok(())
}
