use std::process::ExitCode;

use clap::Parser;
use itinerary::cli::{Arguments, ExitStatus, report};

fn main() -> ExitCode {
    let args = Arguments::parse();
    let verbose = args.verbose();

    match itinerary::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            report::print_error(&err, verbose);
            ExitStatus::Error.into()
        }
    }
}
