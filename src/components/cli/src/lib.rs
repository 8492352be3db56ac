mod help;
mod report;

use enum_dispatch::enum_dispatch;
use help::HelpCommand;
use report::ReportCommand;

#[enum_dispatch(Invoke)]
#[derive(Clone, Debug)]
pub enum Command {
    Help(HelpCommand),
    Report(ReportCommand),
}

impl Command {
    pub fn parse() -> Result<Self, ()> {
        Self::parse_args(std::env::args().skip(1))
    }

    /// Asking for help anywhere on the command line wins over every other option.
    pub fn parse_args(args: impl Iterator<Item = String>) -> Result<Self, ()> {
        let args = args.collect::<Vec<_>>();

        if args.iter().any(|arg| matches!(arg.as_str(), "-h" | "--help")) {
            HelpCommand::parse(args.into_iter()).map(Self::from)
        } else {
            ReportCommand::parse(args.into_iter()).map(Self::from)
        }
    }
}

#[enum_dispatch]
pub trait Invoke {
    fn invoke(self) -> Result<(), ()>;
}
