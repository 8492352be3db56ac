mod error;
mod show;
mod warning;

use core::fmt::Debug;
pub use error::ErrorDiagnostic;
pub use show::Show;
use std::cell::RefCell;
pub use warning::WarningDiagnostic;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

pub trait Diagnostic: Show {
    fn message(&self) -> &str;
    fn severity(&self) -> Severity;

    /// Styled text for stderr, or the bare message if styling it failed.
    fn rendered(&self) -> String {
        let mut shown = String::new();

        match self.show(&mut shown) {
            Ok(()) => shown,
            Err(_) => self.message().to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DiagnosticFlags {
    pub print_without_collecting: bool,
    pub warn_padded_field: bool,
    pub warn_padded_type: bool,
}

impl DiagnosticFlags {
    pub fn with_padding_warnings(self, enabled: bool) -> Self {
        Self {
            warn_padded_field: enabled,
            warn_padded_type: enabled,
            ..self
        }
    }
}

impl Default for DiagnosticFlags {
    fn default() -> Self {
        Self {
            print_without_collecting: true,
            warn_padded_field: false,
            warn_padded_type: false,
        }
    }
}

pub struct Diagnostics {
    diagnostics: RefCell<Vec<Box<dyn Diagnostic>>>,
    flags: DiagnosticFlags,
}

impl Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

impl Diagnostics {
    pub fn new(flags: DiagnosticFlags) -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            flags,
        }
    }

    /// Diagnostics that are kept for later inspection instead of printed.
    pub fn collecting(flags: DiagnosticFlags) -> Self {
        Self::new(DiagnosticFlags {
            print_without_collecting: false,
            ..flags
        })
    }

    pub fn flags(&self) -> &DiagnosticFlags {
        &self.flags
    }

    pub fn push(&self, diagnostic: impl Diagnostic + 'static) {
        if self.flags.print_without_collecting {
            eprintln!("{}", diagnostic.rendered());
        } else {
            self.diagnostics.borrow_mut().push(Box::new(diagnostic));
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .map(|diagnostic| diagnostic.message().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|diagnostic| diagnostic.severity() == Severity::Error)
    }
}

#[test]
fn test_collecting_keeps_messages_in_order() {
    let diagnostics = Diagnostics::collecting(DiagnosticFlags::default());

    diagnostics.push(WarningDiagnostic::new("first", "Order"));
    diagnostics.push(WarningDiagnostic::plain("second"));

    assert_eq!(diagnostics.messages(), ["first", "second"]);
    assert!(!diagnostics.has_errors());

    diagnostics.push(ErrorDiagnostic::plain("third"));
    assert!(diagnostics.has_errors());
    assert_eq!(diagnostics.len(), 3);
}

#[test]
fn test_printing_does_not_collect() {
    let diagnostics = Diagnostics::new(DiagnosticFlags::default());
    diagnostics.push(WarningDiagnostic::plain("printed to stderr"));
    assert!(diagnostics.is_empty());
}

#[test]
fn test_rendered_falls_back_to_message() {
    struct Unshowable;

    impl Show for Unshowable {
        fn show(&self, _w: &mut dyn std::fmt::Write) -> std::fmt::Result {
            Err(std::fmt::Error)
        }
    }

    impl Diagnostic for Unshowable {
        fn message(&self) -> &str {
            "still reported"
        }

        fn severity(&self) -> Severity {
            Severity::Error
        }
    }

    assert_eq!(Unshowable.rendered(), "still reported");

    colored::control::set_override(false);
    assert_eq!(ErrorDiagnostic::plain("boom").rendered(), "error: boom");
}

#[test]
fn test_show_includes_subject_and_message() {
    colored::control::set_override(false);

    let mut shown = String::new();
    WarningDiagnostic::new("Padded type", "Order")
        .show(&mut shown)
        .unwrap();
    assert_eq!(shown, "Order: warning: Padded type");

    let mut shown = String::new();
    ErrorDiagnostic::plain("boom").show(&mut shown).unwrap();
    assert_eq!(shown, "error: boom");
}
