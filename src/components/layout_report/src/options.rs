use diagnostics::DiagnosticFlags;
use target::Target;

/// Where the reported sizes and offsets come from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LayoutSource {
    /// The layout the compiler gave `#[repr(C)]` records on this host.
    #[default]
    Native,

    /// The C layout algorithm simulated for another ABI.
    Analytic(Target),
}

#[derive(Clone, Debug, Default)]
pub struct ReportOptions {
    pub source: LayoutSource,
    pub packed: bool,
    pub diagnostic_flags: DiagnosticFlags,
}
