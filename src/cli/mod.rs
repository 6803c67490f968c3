//! Command-line interface layer.

use anyhow::Result;

pub mod args;
mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command, PrettifyArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Init) => commands::init::init(),
        None => commands::prettify::prettify(&args.prettify),
    }
}
