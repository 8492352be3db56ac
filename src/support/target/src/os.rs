use derive_more::IsVariant;
use std::fmt::Display;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, IsVariant)]
pub enum TargetOs {
    Windows,
    Mac,
    Linux,
    FreeBsd,
}

impl TargetOs {
    pub const HOST: Option<Self> = if cfg!(target_os = "windows") {
        Some(TargetOs::Windows)
    } else if cfg!(target_os = "macos") {
        Some(TargetOs::Mac)
    } else if cfg!(target_os = "linux") {
        Some(TargetOs::Linux)
    } else if cfg!(target_os = "freebsd") {
        Some(TargetOs::FreeBsd)
    } else {
        None
    };

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "windows" | "win" => Some(Self::Windows),
            "mac" | "macos" | "darwin" => Some(Self::Mac),
            "linux" => Some(Self::Linux),
            "freebsd" => Some(Self::FreeBsd),
            _ => None,
        }
    }
}

pub trait TargetOsExt {
    fn is_windows(&self) -> bool;
}

impl TargetOsExt for Option<TargetOs> {
    fn is_windows(&self) -> bool {
        self.is_some_and(|os| os.is_windows())
    }
}

impl Display for TargetOs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TargetOs::Windows => "windows",
            TargetOs::Mac => "macos",
            TargetOs::Linux => "linux",
            TargetOs::FreeBsd => "freebsd",
        })
    }
}
