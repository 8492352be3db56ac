mod record_layout;
mod type_layout;
mod type_layout_cache;

use data_units::ByteUnits;
pub use record_layout::*;
use records::CType;
use target::{Target, TargetOsExt};
pub use type_layout::TypeLayout;
pub use type_layout_cache::TypeLayoutCache;

pub trait TargetLayout {
    fn pointer_layout(&self) -> TypeLayout;
    fn char_layout(&self) -> TypeLayout;
    fn short_layout(&self) -> TypeLayout;
    fn int_layout(&self) -> TypeLayout;
    fn long_layout(&self) -> TypeLayout;
    fn longlong_layout(&self) -> TypeLayout;
    fn float_layout(&self) -> TypeLayout;
    fn double_layout(&self) -> TypeLayout;

    fn c_type_layout(&self, c_type: CType) -> TypeLayout {
        match c_type {
            CType::Char => self.char_layout(),
            CType::Short => self.short_layout(),
            CType::Int => self.int_layout(),
            CType::Long => self.long_layout(),
            CType::LongLong => self.longlong_layout(),
            CType::Float => self.float_layout(),
            CType::Double => self.double_layout(),
            CType::Pointer => self.pointer_layout(),
        }
    }
}

impl TargetLayout for Target {
    fn pointer_layout(&self) -> TypeLayout {
        if is_32_bit(self) {
            TypeLayout::basic(ByteUnits::of(4))
        } else {
            TypeLayout::basic(ByteUnits::of(8))
        }
    }

    fn char_layout(&self) -> TypeLayout {
        TypeLayout::basic(ByteUnits::of(1))
    }

    fn short_layout(&self) -> TypeLayout {
        TypeLayout::basic(ByteUnits::of(2))
    }

    fn int_layout(&self) -> TypeLayout {
        TypeLayout::basic(ByteUnits::of(4))
    }

    fn long_layout(&self) -> TypeLayout {
        if self.os().is_windows() || is_32_bit(self) {
            TypeLayout::basic(ByteUnits::of(4))
        } else {
            TypeLayout::basic(ByteUnits::of(8))
        }
    }

    fn longlong_layout(&self) -> TypeLayout {
        eight_byte_scalar_layout(self)
    }

    fn float_layout(&self) -> TypeLayout {
        TypeLayout::basic(ByteUnits::of(4))
    }

    fn double_layout(&self) -> TypeLayout {
        eight_byte_scalar_layout(self)
    }
}

fn is_32_bit(target: &Target) -> bool {
    // Unknown architectures are assumed to be 64-bit
    target.arch().is_some_and(|arch| arch.is_32_bit())
}

fn eight_byte_scalar_layout(target: &Target) -> TypeLayout {
    // The i386 System V ABI only requires 4-byte alignment for
    // `double` and `long long` when they are struct members.
    if target.arch().is_some_and(|arch| arch.is_x_86()) && !target.os().is_windows() {
        TypeLayout::under_aligned(ByteUnits::of(8), ByteUnits::of(4))
    } else {
        TypeLayout::basic(ByteUnits::of(8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use target::{TargetArch, TargetOs};

    fn target(os: TargetOs, arch: TargetArch) -> Target {
        Target::new(Some(os), Some(arch))
    }

    #[test]
    fn long_depends_on_os_and_arch() {
        let linux = target(TargetOs::Linux, TargetArch::X86_64);
        let windows = target(TargetOs::Windows, TargetArch::X86_64);
        let linux_32 = target(TargetOs::Linux, TargetArch::X86);

        assert_eq!(linux.long_layout().width, ByteUnits::of(8));
        assert_eq!(windows.long_layout().width, ByteUnits::of(4));
        assert_eq!(linux_32.long_layout().width, ByteUnits::of(4));
    }

    #[test]
    fn double_is_under_aligned_on_i386_sysv() {
        let linux_32 = target(TargetOs::Linux, TargetArch::X86).double_layout();
        let windows_32 = target(TargetOs::Windows, TargetArch::X86).double_layout();

        assert_eq!(linux_32.width, ByteUnits::of(8));
        assert_eq!(linux_32.alignment, ByteUnits::of(4));
        assert_eq!(windows_32.alignment, ByteUnits::of(8));
    }

    #[test]
    fn unknown_arch_is_treated_as_64_bit() {
        let unknown = Target::new(Some(TargetOs::Linux), None);

        assert_eq!(unknown.pointer_layout().width, ByteUnits::of(8));
        assert_eq!(unknown.double_layout().alignment, ByteUnits::of(8));
    }

    #[test]
    fn cache_agrees_with_target() {
        let target = target(TargetOs::Mac, TargetArch::Aarch64);
        let cache = TypeLayoutCache::new(target);

        for c_type in CType::ALL {
            assert_eq!(cache.get(c_type), target.c_type_layout(c_type));
            assert_eq!(cache.get(c_type), target.c_type_layout(c_type));
        }
    }

    #[test]
    fn alignments_are_powers_of_two() {
        for os in [TargetOs::Windows, TargetOs::Mac, TargetOs::Linux, TargetOs::FreeBsd] {
            for arch in [TargetArch::X86, TargetArch::X86_64, TargetArch::Aarch64] {
                let target = target(os, arch);

                for c_type in CType::ALL {
                    let layout = target.c_type_layout(c_type);
                    assert!(layout.alignment.is_power_of_2(), "{c_type} on {target}");
                    assert!(layout.width.is_multiple_of(layout.alignment));
                }
            }
        }
    }
}
