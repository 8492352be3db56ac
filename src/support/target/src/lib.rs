mod arch;
mod display;
mod os;

pub use arch::TargetArch;
pub use display::IntoDisplay;
use derive_more::{Display, Error};
pub use os::{TargetOs, TargetOsExt};
use std::str::FromStr;

/// A platform whose C ABI decides type sizes and alignments.
///
/// Either half may be unknown, in which case layout queries fall back to a best guess.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Target {
    arch: Option<TargetArch>,
    os: Option<TargetOs>,
}

impl Target {
    pub const HOST: Self = Self::new(TargetOs::HOST, TargetArch::HOST);

    pub const fn new(os: Option<TargetOs>, arch: Option<TargetArch>) -> Self {
        Self { arch, os }
    }

    pub const fn generic_os(os: TargetOs) -> Self {
        let arch = match os {
            TargetOs::Windows | TargetOs::Mac | TargetOs::Linux | TargetOs::FreeBsd => {
                TargetArch::X86_64
            }
        };

        Self::new(Some(os), Some(arch))
    }

    pub fn os(&self) -> Option<TargetOs> {
        self.os
    }

    pub fn arch(&self) -> Option<TargetArch> {
        self.arch
    }

    pub fn is_fully_known(&self) -> bool {
        self.arch.is_some() && self.os.is_some()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.arch.display(), self.os.display())
    }
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
#[display("unrecognized target '{name}', expected <arch>-<os> such as 'x86_64-linux'")]
pub struct ParseTargetError {
    name: String,
}

impl FromStr for Target {
    type Err = ParseTargetError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let lowercase = name.trim().to_ascii_lowercase();

        if lowercase == "host" {
            return Ok(Self::HOST);
        }

        let parsed = lowercase.split_once('-').and_then(|(arch, os)| {
            let arch = TargetArch::from_name(arch)?;
            let os = TargetOs::from_name(os)?;
            Some(Self::new(Some(os), Some(arch)))
        });

        parsed.ok_or_else(|| ParseTargetError { name: name.into() })
    }
}

#[test]
fn test_parse_target() {
    assert_eq!(
        "x86_64-linux".parse::<Target>(),
        Ok(Target::new(Some(TargetOs::Linux), Some(TargetArch::X86_64)))
    );
    assert_eq!(
        "i686-Windows".parse::<Target>(),
        Ok(Target::new(Some(TargetOs::Windows), Some(TargetArch::X86)))
    );
    assert_eq!(
        "arm64-darwin".parse::<Target>(),
        Ok(Target::new(Some(TargetOs::Mac), Some(TargetArch::Aarch64)))
    );
    assert_eq!("host".parse::<Target>(), Ok(Target::HOST));
}

#[test]
fn test_parse_target_rejects_unknown() {
    let error = "riscv64-linux".parse::<Target>().unwrap_err();
    assert!(error.to_string().contains("'riscv64-linux'"));

    assert!("x86_64".parse::<Target>().is_err());
    assert!("x86_64-plan9".parse::<Target>().is_err());
}

#[test]
fn test_display_round_trips() {
    let target = Target::generic_os(TargetOs::FreeBsd);
    assert_eq!(target.to_string(), "x86_64-freebsd");
    assert_eq!(target.to_string().parse::<Target>(), Ok(target));

    assert_eq!(Target::new(None, None).to_string(), "unknown-unknown");
}
