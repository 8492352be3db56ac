use diagnostics::{Diagnostics, WarningDiagnostic};
use target::Target;

pub fn warn_if_unsupported_target(target: &Target, diagnostics: &Diagnostics) {
    if target.arch().is_none() {
        diagnostics.push(WarningDiagnostic::plain(
            "Target architecture is not supported, falling back to best guess",
        ));
    }

    if target.os().is_none() {
        diagnostics.push(WarningDiagnostic::plain(
            "Target os is not supported, falling back to best guess",
        ));
    }
}

#[test]
fn test_warns_once_per_unknown_half() {
    use diagnostics::DiagnosticFlags;
    use target::TargetOs;

    let diagnostics = Diagnostics::collecting(DiagnosticFlags::default());
    warn_if_unsupported_target(&Target::generic_os(TargetOs::Linux), &diagnostics);
    assert!(diagnostics.is_empty());

    warn_if_unsupported_target(&Target::new(None, None), &diagnostics);
    assert_eq!(diagnostics.len(), 2);
}
