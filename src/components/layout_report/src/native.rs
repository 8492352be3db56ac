//! The host compiler's own C layout of the demonstration records.

use core::ffi::{c_char, c_double, c_int};
use data_units::ByteUnits;
use records::RecordKind;
use std::mem::{align_of, offset_of, size_of};
use target_layout::RecordLayout;

pub trait NativeRecord {
    fn layout() -> RecordLayout;
}

fn bytes(count: usize) -> ByteUnits {
    ByteUnits::of(count as u64)
}

macro_rules! native_records {
    ($($(#[$attr:meta])* struct $name:ident { $($field:ident: $ty:ty),* $(,)? })*) => {
        $(
            $(#[$attr])*
            #[derive(Copy, Clone, Default)]
            pub struct $name {
                $(pub $field: $ty),*
            }

            impl NativeRecord for $name {
                fn layout() -> RecordLayout {
                    RecordLayout::new(
                        bytes(size_of::<$name>()),
                        bytes(align_of::<$name>()),
                        vec![$(bytes(offset_of!($name, $field))),*],
                        vec![$(bytes(size_of::<$ty>())),*],
                    )
                }
            }
        )*
    };
}

native_records! {
    #[repr(C)]
    struct Order {
        ch: c_char,
        d: c_double,
        i: c_int,
    }

    #[repr(C)]
    struct OrderOptimized {
        d: c_double,
        i: c_int,
        ch: c_char,
    }

    #[repr(C, packed)]
    struct PackedOrder {
        ch: c_char,
        d: c_double,
        i: c_int,
    }

    #[repr(C, packed)]
    struct PackedOrderOptimized {
        d: c_double,
        i: c_int,
        ch: c_char,
    }
}

pub fn native_layout(kind: RecordKind, packed: bool) -> RecordLayout {
    match (kind, packed) {
        (RecordKind::Order, false) => Order::layout(),
        (RecordKind::OrderOptimized, false) => OrderOptimized::layout(),
        (RecordKind::Order, true) => PackedOrder::layout(),
        (RecordKind::OrderOptimized, true) => PackedOrderOptimized::layout(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use records::CType;

    #[test]
    fn native_fields_match_declarations() {
        for kind in RecordKind::ALL {
            let declared = kind.declaration();

            for packed in [false, true] {
                let layout = native_layout(kind, packed);
                assert_eq!(layout.len(), declared.len());

                let widths: Vec<_> = declared
                    .iter()
                    .map(|field| match field.c_type {
                        CType::Char => size_of::<c_char>(),
                        CType::Int => size_of::<c_int>(),
                        CType::Double => size_of::<c_double>(),
                        other => panic!("unexpected field type {other}"),
                    })
                    .map(bytes)
                    .collect();
                assert_eq!(layout.field_widths, widths, "{declared}");
            }
        }
    }

    #[test]
    fn packed_records_are_dense() {
        for kind in RecordKind::ALL {
            let layout = native_layout(kind, true);

            assert_eq!(layout.alignment, ByteUnits::ONE);
            assert_eq!(layout.total_padding(), ByteUnits::ZERO);
            assert_eq!(layout.size, layout.data_size);
        }
    }

    #[test]
    fn offsets_match_field_addresses() {
        let order = Order::default();
        let base = (&raw const order).addr();

        assert_eq!((&raw const order.ch).addr() - base, offset_of!(Order, ch));
        assert_eq!((&raw const order.d).addr() - base, offset_of!(Order, d));
        assert_eq!((&raw const order.i).addr() - base, offset_of!(Order, i));
    }

    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    #[test]
    fn sixty_four_bit_host_layouts() {
        let order = native_layout(RecordKind::Order, false);
        assert_eq!(order.size, ByteUnits::of(24));
        assert_eq!(
            order.field_offsets,
            [ByteUnits::of(0), ByteUnits::of(8), ByteUnits::of(16)]
        );

        let optimized = native_layout(RecordKind::OrderOptimized, false);
        assert_eq!(optimized.size, ByteUnits::of(16));
        assert_eq!(
            optimized.field_offsets,
            [ByteUnits::of(0), ByteUnits::of(8), ByteUnits::of(12)]
        );
    }
}
