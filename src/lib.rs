//! Itinerary - prettifier for plain-text travel documents
//!
//! Itinerary is a CLI tool and library that scans an itinerary for inline
//! markup (airport codes, city references, dates and times), resolves the
//! codes against an airport lookup table and rewrites every token in a
//! human-readable, colorized form.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `error`: Fatal error types for a prettify run
//! - `job`: One file-to-file prettify run
//! - `lookup`: Airport lookup table and its CSV loader
//! - `markup`: Token matchers and resolvers for the markup grammar
//! - `pipeline`: Ordered rewrite passes and whitespace normalization

pub mod cli;
pub mod config;
pub mod error;
pub mod job;
pub mod lookup;
pub mod markup;
pub mod pipeline;

pub use error::{LookupDefect, PrettifyError};
pub use lookup::LookupTable;
pub use markup::Palette;
pub use pipeline::{Rewrite, RewriteStats, prettify};
