mod builder;

pub use builder::RecordLayoutBuilder;
use data_units::ByteUnits;
use diagnostics::{Diagnostics, WarningDiagnostic};
use records::Record;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordLayout {
    pub size: ByteUnits,
    pub alignment: ByteUnits,

    /// Size without tail padding
    pub data_size: ByteUnits,

    pub field_offsets: Vec<ByteUnits>,
    pub field_widths: Vec<ByteUnits>,
}

impl RecordLayout {
    pub fn new(
        size: ByteUnits,
        alignment: ByteUnits,
        field_offsets: Vec<ByteUnits>,
        field_widths: Vec<ByteUnits>,
    ) -> Self {
        assert_eq!(field_offsets.len(), field_widths.len());

        let data_size = field_offsets
            .iter()
            .zip(field_widths.iter())
            .map(|(offset, width)| *offset + *width)
            .max()
            .unwrap_or_default();

        Self {
            size,
            alignment,
            data_size,
            field_offsets,
            field_widths,
        }
    }

    pub fn len(&self) -> usize {
        self.field_offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_offsets.is_empty()
    }

    pub fn field_offset(&self, index: usize) -> Option<ByteUnits> {
        self.field_offsets.get(index).copied()
    }

    /// Padding inserted between the end of the previous field and the field at `index`.
    pub fn padding_before(&self, index: usize) -> Option<ByteUnits> {
        let offset = self.field_offset(index)?;

        let previous_end = index
            .checked_sub(1)
            .map(|previous| self.field_offsets[previous] + self.field_widths[previous])
            .unwrap_or_default();

        Some(previous_end.gap_to(offset))
    }

    pub fn tail_padding(&self) -> ByteUnits {
        self.data_size.gap_to(self.size)
    }

    pub fn total_padding(&self) -> ByteUnits {
        (0..self.len())
            .filter_map(|index| self.padding_before(index))
            .fold(self.tail_padding(), |total, padding| total + padding)
    }

    pub fn warn_padding(&self, record: &Record, diagnostics: &Diagnostics) {
        let flags = diagnostics.flags();

        if flags.warn_padded_field {
            for (index, field) in record.iter().enumerate() {
                let Some(padding) = self.padding_before(index) else {
                    break;
                };

                if !padding.is_zero() {
                    diagnostics.push(WarningDiagnostic::new(
                        format!(
                            "Padded field '{}' at index {} with {} of padding before it",
                            field.name, index, padding
                        ),
                        &record.name,
                    ));
                }
            }
        }

        if flags.warn_padded_type && !self.tail_padding().is_zero() {
            diagnostics.push(WarningDiagnostic::new(
                format!(
                    "Padded type '{}', with {} to alignment boundary",
                    record.name,
                    self.tail_padding()
                ),
                &record.name,
            ));
        }
    }
}
