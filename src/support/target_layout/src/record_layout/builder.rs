use super::RecordLayout;
use crate::TypeLayoutCache;
use data_units::ByteUnits;
use diagnostics::{Diagnostics, WarningDiagnostic};
use records::{Field, Record};

/// Lays out a C struct the way a System V / Itanium style compiler does.
///
/// Fields are placed in declaration order at the next offset satisfying their alignment,
/// and the finished size is rounded up to the record alignment. Packed records use an
/// alignment of one for every field.
#[derive(Debug)]
pub struct RecordLayoutBuilder<'a> {
    pub type_layout_cache: &'a TypeLayoutCache,
    pub size: ByteUnits,
    pub alignment: ByteUnits,
    pub unpacked_alignment: ByteUnits,
    pub field_offsets: Vec<ByteUnits>,
    pub field_widths: Vec<ByteUnits>,
    pub packed: bool,

    /// Size without tail padding
    pub data_size: ByteUnits,

    // Whether packing moved any field away from its natural offset
    pub has_packed_field: bool,

    pub friendly_record_name: &'a str,
    pub diagnostics: &'a Diagnostics,
}

impl<'a> RecordLayoutBuilder<'a> {
    pub fn generate(
        type_layout_cache: &'a TypeLayoutCache,
        diagnostics: &'a Diagnostics,
        record: &'a Record,
    ) -> RecordLayout {
        let mut builder = RecordLayoutBuilder::new(type_layout_cache, diagnostics, &record.name);
        builder.layout(record);

        RecordLayout {
            size: builder.size,
            alignment: builder.alignment,
            data_size: builder.data_size,
            field_offsets: builder.field_offsets,
            field_widths: builder.field_widths,
        }
    }

    pub fn new(
        type_layout_cache: &'a TypeLayoutCache,
        diagnostics: &'a Diagnostics,
        friendly_record_name: &'a str,
    ) -> Self {
        Self {
            type_layout_cache,
            size: ByteUnits::ZERO,
            alignment: ByteUnits::ONE,
            unpacked_alignment: ByteUnits::ONE,
            field_offsets: Default::default(),
            field_widths: Default::default(),
            packed: false,
            data_size: ByteUnits::ZERO,
            has_packed_field: false,
            friendly_record_name,
            diagnostics,
        }
    }

    pub fn layout(&mut self, record: &Record) {
        self.init_layout(record);
        self.layout_fields(record);
        self.finish_layout(record);
    }

    pub fn init_layout(&mut self, record: &Record) {
        self.packed = record.is_packed;
    }

    pub fn layout_fields(&mut self, record: &Record) {
        for field in record.iter() {
            self.layout_field(field);
        }
    }

    pub fn layout_field(&mut self, field: &Field) {
        let type_layout = self.type_layout_cache.get(field.c_type);
        let field_size = type_layout.width;

        let unpacked_field_alignment = type_layout.alignment;
        let packed_field_alignment = ByteUnits::ONE;

        let field_alignment = if self.packed {
            packed_field_alignment
        } else {
            unpacked_field_alignment
        };

        let field_offset = self.data_size.align_to(field_alignment);
        let unpacked_field_offset = self.data_size.align_to(unpacked_field_alignment);

        assert!(field_offset.is_multiple_of(field_alignment));

        // Place field at current location
        self.field_offsets.push(field_offset);
        self.field_widths.push(field_size);

        if self.packed && field_offset != unpacked_field_offset {
            self.has_packed_field = true;
        }

        // Reserve space for this field
        self.data_size = field_offset + field_size;
        self.size = self.size.max(self.data_size);

        self.update_alignment(field_alignment, unpacked_field_alignment);
    }

    pub fn finish_layout(&mut self, record: &Record) {
        // Round size of record up to its alignment
        let unpacked_size = self.size.align_to(self.unpacked_alignment);
        self.size = self.size.align_to(self.alignment);

        if self.packed
            && self.unpacked_alignment <= self.alignment
            && unpacked_size == self.size
            && !self.has_packed_field
        {
            self.diagnostics.push(WarningDiagnostic::new(
                format!("Unnecessarily packed type '{}'", self.friendly_record_name),
                &record.name,
            ));
        }
    }

    pub fn update_alignment(&mut self, new_alignment: ByteUnits, new_unpacked_alignment: ByteUnits) {
        if new_alignment > self.alignment {
            assert!(new_alignment.is_power_of_2());
            self.alignment = new_alignment;
        }

        if new_unpacked_alignment > self.unpacked_alignment {
            assert!(new_unpacked_alignment.is_power_of_2());
            self.unpacked_alignment = new_unpacked_alignment;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TargetLayout;
    use diagnostics::DiagnosticFlags;
    use records::{CType, RecordKind};
    use target::{Target, TargetArch, TargetOs};

    fn offsets(layout: &RecordLayout) -> Vec<u64> {
        layout.field_offsets.iter().map(ByteUnits::bytes).collect()
    }

    fn generate(target: Target, record: &Record) -> (RecordLayout, Diagnostics) {
        let cache = TypeLayoutCache::new(target);
        let diagnostics = Diagnostics::collecting(DiagnosticFlags::default());
        let layout = RecordLayoutBuilder::generate(&cache, &diagnostics, record);
        (layout, diagnostics)
    }

    fn x86_64_linux() -> Target {
        Target::generic_os(TargetOs::Linux)
    }

    #[test]
    fn order_on_64_bit() {
        let (layout, _) = generate(x86_64_linux(), &RecordKind::Order.declaration());

        assert_eq!(layout.size, ByteUnits::of(24));
        assert_eq!(layout.alignment, ByteUnits::of(8));
        assert_eq!(offsets(&layout), [0, 8, 16]);
        assert_eq!(layout.padding_before(1), Some(ByteUnits::of(7)));
        assert_eq!(layout.tail_padding(), ByteUnits::of(4));
    }

    #[test]
    fn order_optimized_on_64_bit() {
        let (layout, _) = generate(x86_64_linux(), &RecordKind::OrderOptimized.declaration());

        assert_eq!(layout.size, ByteUnits::of(16));
        assert_eq!(offsets(&layout), [0, 8, 12]);
        assert_eq!(layout.tail_padding(), ByteUnits::of(3));
        assert_eq!(layout.total_padding(), ByteUnits::of(3));
    }

    #[test]
    fn windows_and_aarch64_match_x86_64_linux() {
        for target in [
            Target::generic_os(TargetOs::Windows),
            Target::new(Some(TargetOs::Mac), Some(TargetArch::Aarch64)),
        ] {
            for kind in RecordKind::ALL {
                let record = kind.declaration();
                assert_eq!(generate(target, &record).0, generate(x86_64_linux(), &record).0);
            }
        }
    }

    #[test]
    fn i386_linux_under_aligns_double() {
        let target = Target::new(Some(TargetOs::Linux), Some(TargetArch::X86));

        let (order, _) = generate(target, &RecordKind::Order.declaration());
        assert_eq!(order.size, ByteUnits::of(16));
        assert_eq!(order.alignment, ByteUnits::of(4));
        assert_eq!(offsets(&order), [0, 4, 12]);

        let (optimized, _) = generate(target, &RecordKind::OrderOptimized.declaration());
        assert_eq!(optimized.size, ByteUnits::of(16));
        assert_eq!(offsets(&optimized), [0, 8, 12]);
    }

    #[test]
    fn packed_records_have_no_padding() {
        let (order, diagnostics) =
            generate(x86_64_linux(), &RecordKind::Order.declaration().packed(true));

        assert_eq!(order.size, ByteUnits::of(13));
        assert_eq!(order.alignment, ByteUnits::ONE);
        assert_eq!(offsets(&order), [0, 1, 9]);
        assert_eq!(order.total_padding(), ByteUnits::ZERO);
        assert!(diagnostics.is_empty());

        let (optimized, diagnostics) = generate(
            x86_64_linux(),
            &RecordKind::OrderOptimized.declaration().packed(true),
        );

        assert_eq!(optimized.size, ByteUnits::of(13));
        assert_eq!(offsets(&optimized), [0, 8, 12]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn warns_about_unnecessary_packing() {
        let record = Record::new(
            "Bytes",
            [Field::new("a", CType::Char), Field::new("b", CType::Char)],
        )
        .packed(true);

        let (layout, diagnostics) = generate(x86_64_linux(), &record);

        assert_eq!(layout.size, ByteUnits::of(2));
        assert_eq!(diagnostics.messages(), ["Unnecessarily packed type 'Bytes'"]);
    }

    #[test]
    fn empty_record() {
        let (layout, _) = generate(x86_64_linux(), &Record::new("Empty", Vec::new()));

        assert_eq!(layout.size, ByteUnits::ZERO);
        assert_eq!(layout.alignment, ByteUnits::ONE);
        assert!(layout.is_empty());
    }

    fn sample_records() -> Vec<Record> {
        let shapes: [&[CType]; 5] = [
            &[CType::Char, CType::Double, CType::Int],
            &[CType::Short, CType::Char, CType::Pointer, CType::Char],
            &[CType::Float, CType::LongLong, CType::Short, CType::Char, CType::Int],
            &[CType::Char, CType::Long, CType::Char, CType::Double, CType::Short],
            &[CType::Char, CType::Char, CType::Char],
        ];

        shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| {
                Record::new(
                    format!("Sample{i}"),
                    shape
                        .iter()
                        .enumerate()
                        .map(|(j, c_type)| Field::new(format!("f{j}"), *c_type)),
                )
            })
            .collect()
    }

    fn all_targets() -> Vec<Target> {
        let mut targets = Vec::new();
        for os in [TargetOs::Windows, TargetOs::Mac, TargetOs::Linux, TargetOs::FreeBsd] {
            for arch in [TargetArch::X86, TargetArch::X86_64, TargetArch::Aarch64] {
                targets.push(Target::new(Some(os), Some(arch)));
            }
        }
        targets
    }

    #[test]
    fn fields_land_on_their_alignment() {
        for target in all_targets() {
            for record in sample_records() {
                let (layout, _) = generate(target, &record);

                for (field, offset) in record.iter().zip(layout.field_offsets.iter()) {
                    let alignment = target.c_type_layout(field.c_type).alignment;
                    assert!(offset.is_multiple_of(alignment), "{record} on {target}");
                }
            }
        }
    }

    #[test]
    fn size_is_multiple_of_widest_alignment() {
        for target in all_targets() {
            for record in sample_records() {
                let (layout, _) = generate(target, &record);

                let widest = record
                    .iter()
                    .map(|field| target.c_type_layout(field.c_type).alignment)
                    .max()
                    .unwrap_or(ByteUnits::ONE);

                assert_eq!(layout.alignment, widest);
                assert!(layout.size.is_multiple_of(widest), "{record} on {target}");
                assert!(layout.size >= layout.data_size);
            }
        }
    }

    #[test]
    fn descending_alignment_never_grows() {
        for target in all_targets() {
            for record in sample_records() {
                let mut reordered = record.clone();
                reordered.fields.sort_by_key(|field| {
                    std::cmp::Reverse(target.c_type_layout(field.c_type).alignment)
                });

                let (declared, _) = generate(target, &record);
                let (descending, _) = generate(target, &reordered);

                assert!(descending.size <= declared.size, "{record} on {target}");
                assert_eq!(descending.tail_padding() + descending.data_size, descending.size);
            }
        }
    }
}
