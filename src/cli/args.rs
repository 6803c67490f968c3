//! CLI argument definitions using clap.
//!
//! The default invocation prettifies a document:
//!
//! ```text
//! itinerary ./input.txt ./output.txt ./airport-lookup.csv [--print]
//! ```
//!
//! ## Commands
//!
//! - `init`: Write a default `.itineraryrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const MARKUP_HELP: &str = "\
Markup:
  #LHR                            IATA airport code -> \"London Heathrow Airport\"
  ##EGLL                          ICAO airport code -> \"London Heathrow Airport\"
  *#LHR, *##EGLL                  City of the airport -> London
  D(2031-12-03T13:15:30+01:00)    Date -> 03 Dec 2031
  T12(2031-12-03T13:15+01:00)     12-hour local time -> 01:15PM (+01:00)
  T24(2031-12-03T13:15+01:00)     24-hour local time -> 13:15 (+01:00)
  T12(2031-12-03T13:15Z)          12-hour UTC time -> 01:15PM (+00:00)
  T24(2031-12-03T13:15Z)          24-hour UTC time -> 13:15 (+00:00)

Tokens that cannot be resolved are left as written.";

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = MARKUP_HELP,
    args_conflicts_with_subcommands = true
)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub prettify: PrettifyArgs,
}

impl Arguments {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Init) => false,
            None => self.prettify.verbose,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PrettifyArgs {
    /// Itinerary text to prettify
    pub input: Option<PathBuf>,

    /// Where to write the prettified itinerary
    pub output: Option<PathBuf>,

    /// Airport lookup CSV (name, iata_code, icao_code, municipality)
    pub lookup: Option<PathBuf>,

    /// Also print the prettified itinerary to stdout
    #[arg(long)]
    pub print: bool,

    /// Write the output without ANSI colors (overrides config file)
    #[arg(long)]
    pub no_color: bool,

    /// Config file path (default: nearest .itineraryrc.json)
    #[arg(long, env = "ITINERARY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The three required paths of a prettify run.
pub struct RunPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lookup: PathBuf,
}

impl PrettifyArgs {
    /// All three paths, or `None` if any is missing.
    pub fn paths(&self) -> Option<RunPaths> {
        Some(RunPaths {
            input: self.input.clone()?,
            output: self.output.clone()?,
            lookup: self.lookup.clone()?,
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .itineraryrc.json configuration file
    Init,
}
