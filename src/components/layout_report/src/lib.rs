pub mod native;
mod options;
mod render;

use data_units::ByteUnits;
use diagnostics::Diagnostics;
pub use native::native_layout;
pub use options::{LayoutSource, ReportOptions};
use records::{Record, RecordKind};
pub use render::render;
use target_layout::{RecordLayout, RecordLayoutBuilder, TypeLayoutCache};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordSize {
    pub name: String,
    pub size: ByteUnits,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldOffset {
    pub name: String,
    pub offset: ByteUnits,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordOffsets {
    pub name: String,
    pub fields: Vec<FieldOffset>,
}

/// Everything that gets rendered, in output order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub sizes: Vec<RecordSize>,
    pub offsets: Vec<RecordOffsets>,
}

#[derive(Debug)]
struct LaidOutRecord {
    kind: RecordKind,
    record: Record,
    layout: RecordLayout,
}

/// Answers size and offset queries about the demonstration records.
///
/// Layouts are computed once up front, so every query afterwards is pure.
#[derive(Debug)]
pub struct LayoutReporter<'a> {
    records: Vec<LaidOutRecord>,
    diagnostics: &'a Diagnostics,
}

impl<'a> LayoutReporter<'a> {
    pub fn new(options: &ReportOptions, diagnostics: &'a Diagnostics) -> Self {
        let declarations =
            RecordKind::ALL.map(|kind| (kind, kind.declaration().packed(options.packed)));

        let records = match options.source {
            LayoutSource::Native => declarations
                .into_iter()
                .map(|(kind, record)| LaidOutRecord {
                    kind,
                    layout: native_layout(kind, record.is_packed),
                    record,
                })
                .collect(),
            LayoutSource::Analytic(target) => {
                let type_layout_cache = TypeLayoutCache::new(target);

                declarations
                    .into_iter()
                    .map(|(kind, record)| LaidOutRecord {
                        kind,
                        layout: RecordLayoutBuilder::generate(
                            &type_layout_cache,
                            diagnostics,
                            &record,
                        ),
                        record,
                    })
                    .collect()
            }
        };

        Self {
            records,
            diagnostics,
        }
    }

    fn laid_out(&self, kind: RecordKind) -> Option<&LaidOutRecord> {
        self.records.iter().find(|laid_out| laid_out.kind == kind)
    }

    pub fn layout(&self, kind: RecordKind) -> Option<&RecordLayout> {
        self.laid_out(kind).map(|laid_out| &laid_out.layout)
    }

    /// Total size of each record, `Order` first.
    pub fn report_sizes(&self) -> Vec<RecordSize> {
        self.records
            .iter()
            .map(|laid_out| RecordSize {
                name: laid_out.record.name.clone(),
                size: laid_out.layout.size,
            })
            .collect()
    }

    /// Offset of each field of `kind`, in declaration order.
    pub fn report_offsets(&self, kind: RecordKind) -> Vec<FieldOffset> {
        let Some(laid_out) = self.laid_out(kind) else {
            return Vec::new();
        };

        laid_out
            .record
            .iter()
            .zip(laid_out.layout.field_offsets.iter())
            .map(|(field, offset)| FieldOffset {
                name: field.name.clone(),
                offset: *offset,
            })
            .collect()
    }

    pub fn report(&self) -> Report {
        Report {
            sizes: self.report_sizes(),
            offsets: self
                .records
                .iter()
                .map(|laid_out| RecordOffsets {
                    name: laid_out.record.name.clone(),
                    fields: self.report_offsets(laid_out.kind),
                })
                .collect(),
        }
    }

    pub fn warn_padding(&self) {
        for laid_out in self.records.iter() {
            laid_out
                .layout
                .warn_padding(&laid_out.record, self.diagnostics);
        }
    }
}
