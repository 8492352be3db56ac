use crate::{Diagnostic, Severity, show::Show};
use colored::Colorize;

#[derive(Clone, Debug)]
pub struct WarningDiagnostic {
    message: String,
    subject: Option<String>,
}

impl WarningDiagnostic {
    /// A warning about the named record.
    pub fn new(message: impl ToString, subject: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            subject: Some(subject.to_string()),
        }
    }

    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
            subject: None,
        }
    }
}

impl Show for WarningDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        if let Some(subject) = &self.subject {
            write!(
                w,
                "{}: {} {}",
                subject.bold(),
                "warning:".yellow().bold(),
                self.message,
            )
        } else {
            write!(w, "{} {}", "warning:".yellow().bold(), self.message)
        }
    }
}

impl Diagnostic for WarningDiagnostic {
    fn message(&self) -> &str {
        &self.message
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }
}
