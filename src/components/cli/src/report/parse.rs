use super::ReportCommand;
use layout_report::{LayoutSource, ReportOptions};
use target::{Target, TargetOs};

impl ReportCommand {
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let mut options = ReportOptions::default();
        let mut warn_padded = false;

        while let Some(option) = args.next() {
            match option.as_str() {
                "--packed" => options.packed = true,
                "--warn-padded" => warn_padded = true,
                "--windows" => {
                    options.source = LayoutSource::Analytic(Target::generic_os(TargetOs::Windows));
                }
                "--mac" | "--macos" => {
                    options.source = LayoutSource::Analytic(Target::generic_os(TargetOs::Mac));
                }
                "--linux" => {
                    options.source = LayoutSource::Analytic(Target::generic_os(TargetOs::Linux));
                }
                "--freebsd" => {
                    options.source = LayoutSource::Analytic(Target::generic_os(TargetOs::FreeBsd));
                }
                "--target" => {
                    let Some(name) = args.next() else {
                        eprintln!("error: Expected target name after '--target'");
                        return Err(());
                    };

                    let target = name.parse::<Target>().map_err(|err| {
                        eprintln!("error: {}", err);
                    })?;

                    options.source = LayoutSource::Analytic(target);
                }
                _ => {
                    eprintln!("error: Unrecognized option '{}'", option);
                    return Err(());
                }
            }
        }

        options.diagnostic_flags = options.diagnostic_flags.with_padding_warnings(warn_padded);
        Ok(Self { options })
    }
}
