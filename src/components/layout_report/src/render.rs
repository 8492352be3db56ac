use crate::Report;
use std::io::{self, Write};

/// Writes the report in its fixed textual format.
///
/// The first write error is returned as is, and nothing more is written after it.
pub fn render(w: &mut impl Write, report: &Report) -> io::Result<()> {
    for record_size in report.sizes.iter() {
        writeln!(w, "Size of struct {}: {}", record_size.name, record_size.size)?;
    }

    for record_offsets in report.offsets.iter() {
        writeln!(w)?;
        writeln!(w, "Offsets in struct {}:", record_offsets.name)?;

        for field_offset in record_offsets.fields.iter() {
            writeln!(w, "{}: {}", field_offset.name, field_offset.offset)?;
        }
    }

    w.flush()
}
