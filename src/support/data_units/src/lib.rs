use std::{
    fmt::Display,
    ops::{Add, Rem},
};

#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ByteUnits {
    units: u64,
}

impl ByteUnits {
    pub const ZERO: Self = Self { units: 0 };
    pub const ONE: Self = Self { units: 1 };

    pub const fn of(value: u64) -> Self {
        Self { units: value }
    }

    pub const fn bytes(&self) -> u64 {
        self.units
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Rounds up to the next multiple of `align`, which must be a non-zero power of two.
    pub fn align_to(&self, align: ByteUnits) -> ByteUnits {
        let width = self.units;
        let align = align.units;

        assert_ne!(align, 0);
        Self::of((width + align - 1) & !(align - 1))
    }

    pub fn is_power_of_2(&self) -> bool {
        self.units != 0 && (self.units & (self.units - 1)) == 0
    }

    pub fn is_multiple_of(&self, align: ByteUnits) -> bool {
        !align.is_zero() && (*self % align).is_zero()
    }

    /// Bytes between `self` and `later`, or zero if `later` is not past `self`.
    pub fn gap_to(&self, later: ByteUnits) -> ByteUnits {
        Self::of(later.units.saturating_sub(self.units))
    }
}

macro_rules! impl_units_from {
    ($ty:ty) => {
        impl From<$ty> for ByteUnits {
            fn from(value: $ty) -> Self {
                Self {
                    units: value.into(),
                }
            }
        }
    };
}

impl_units_from!(u8);
impl_units_from!(u16);
impl_units_from!(u32);
impl_units_from!(u64);

impl Add<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn add(self, rhs: ByteUnits) -> Self::Output {
        Self {
            units: self.units + rhs.units,
        }
    }
}

impl Rem<ByteUnits> for ByteUnits {
    type Output = ByteUnits;

    fn rem(self, rhs: ByteUnits) -> Self::Output {
        Self {
            units: self.units % rhs.units,
        }
    }
}

impl Display for ByteUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes", self.units)
    }
}

#[test]
fn test_align_to() {
    assert_eq!(ByteUnits::of(1).align_to(ByteUnits::of(8)), ByteUnits::of(8));
    assert_eq!(ByteUnits::of(8).align_to(ByteUnits::of(8)), ByteUnits::of(8));
    assert_eq!(ByteUnits::of(13).align_to(ByteUnits::of(4)), ByteUnits::of(16));
    assert_eq!(ByteUnits::ZERO.align_to(ByteUnits::of(8)), ByteUnits::ZERO);
    assert_eq!(ByteUnits::of(21).align_to(ByteUnits::ONE), ByteUnits::of(21));
}

#[test]
fn test_power_of_2() {
    assert!(ByteUnits::of(1).is_power_of_2());
    assert!(ByteUnits::of(8).is_power_of_2());
    assert!(!ByteUnits::of(12).is_power_of_2());
    assert!(!ByteUnits::ZERO.is_power_of_2());
}

#[test]
fn test_gap_and_multiple() {
    assert_eq!(ByteUnits::of(1).gap_to(ByteUnits::of(8)), ByteUnits::of(7));
    assert_eq!(ByteUnits::of(8).gap_to(ByteUnits::of(1)), ByteUnits::ZERO);
    assert!(ByteUnits::of(24).is_multiple_of(ByteUnits::of(8)));
    assert!(!ByteUnits::of(12).is_multiple_of(ByteUnits::of(8)));
    assert!(!ByteUnits::of(12).is_multiple_of(ByteUnits::ZERO));
}

#[test]
fn test_from_integers() {
    assert_eq!(ByteUnits::from(4u8), ByteUnits::of(4));
    assert_eq!(ByteUnits::from(8u32) + ByteUnits::from(4u16), ByteUnits::of(12));
}

#[test]
fn test_display() {
    assert_eq!(ByteUnits::of(24).to_string(), "24 bytes");
    assert_eq!(ByteUnits::of(1).to_string(), "1 bytes");
}
