use derive_more::IsVariant;
use std::fmt::Display;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, IsVariant)]
pub enum TargetArch {
    X86,
    X86_64,
    Aarch64,
}

impl TargetArch {
    pub const HOST: Option<Self> = if cfg!(target_arch = "x86_64") {
        Some(TargetArch::X86_64)
    } else if cfg!(target_arch = "aarch64") {
        Some(TargetArch::Aarch64)
    } else if cfg!(target_arch = "x86") {
        Some(TargetArch::X86)
    } else {
        None
    };

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "x86" | "i386" | "i686" => Some(Self::X86),
            "x86_64" | "amd64" => Some(Self::X86_64),
            "aarch64" | "arm64" => Some(Self::Aarch64),
            _ => None,
        }
    }

    pub fn is_32_bit(&self) -> bool {
        match self {
            Self::X86 => true,
            Self::X86_64 | Self::Aarch64 => false,
        }
    }
}

impl Display for TargetArch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TargetArch::X86 => "x86",
            TargetArch::X86_64 => "x86_64",
            TargetArch::Aarch64 => "aarch64",
        })
    }
}
