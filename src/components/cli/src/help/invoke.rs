use super::HelpCommand;
use crate::Invoke;
use diagnostics::{DiagnosticFlags, Diagnostics, ErrorDiagnostic};
use indoc::indoc;
use std::io::Write;

const USAGE: &str = indoc! {"
    usage: struct_padding [OPTIONS]

    Prints the size and field offsets of two C structs holding the same
    fields in a different order.

    options:
      --target <arch-os>   Simulate the C layout of another ABI (e.g. i686-linux)
      --windows            Simulate x86_64 Windows
      --mac, --macos       Simulate x86_64 macOS
      --linux              Simulate x86_64 Linux
      --freebsd            Simulate x86_64 FreeBSD
      --packed             Report the packed variants of both structs
      --warn-padded        Warn about every padded field and struct
      -h, --help           Show this message
"};

impl Invoke for HelpCommand {
    fn invoke(self) -> Result<(), ()> {
        let diagnostics = Diagnostics::new(DiagnosticFlags::default());
        let mut stdout = std::io::stdout().lock();

        help(&mut stdout, &diagnostics)
    }
}

fn help(w: &mut impl Write, diagnostics: &Diagnostics) -> Result<(), ()> {
    w.write_all(USAGE.as_bytes())
        .and_then(|()| w.flush())
        .map_err(|err| {
            diagnostics.push(ErrorDiagnostic::plain(format!(
                "Failed to write help: {}",
                err
            )));
        })
}
