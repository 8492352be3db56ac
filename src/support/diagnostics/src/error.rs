use crate::{Diagnostic, Severity, show::Show};
use colored::Colorize;

#[derive(Clone, Debug)]
pub struct ErrorDiagnostic {
    message: String,
}

impl ErrorDiagnostic {
    pub fn plain(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Show for ErrorDiagnostic {
    fn show(&self, w: &mut dyn std::fmt::Write) -> std::fmt::Result {
        write!(w, "{} {}", "error:".red().bold(), self.message)
    }
}

impl Diagnostic for ErrorDiagnostic {
    fn message(&self) -> &str {
        &self.message
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }
}
