//! Fatal errors of a prettify run.
//!
//! Everything here aborts the run before any output is written. Per-token
//! failures (unknown codes, unparsable timestamps) never show up as errors;
//! the pipeline leaves those tokens untouched instead.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrettifyError {
    #[error("Input not found")]
    InputNotFound(PathBuf),

    #[error("Airport lookup not found")]
    LookupNotFound(PathBuf),

    #[error("Airport lookup malformed")]
    MalformedLookup(#[source] LookupDefect),

    #[error("Failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PrettifyError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

impl From<LookupDefect> for PrettifyError {
    fn from(defect: LookupDefect) -> Self {
        Self::MalformedLookup(defect)
    }
}

/// Why a lookup table was rejected. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupDefect {
    #[error("the lookup document is empty")]
    Empty,

    #[error("required column '{0}' is missing from the header")]
    MissingColumn(String),

    #[error("line {line} has {found} field(s) but the header has {expected}")]
    ShortRow {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("line {line} has an empty '{column}' field")]
    EmptyField { line: usize, column: String },

    #[error("the lookup document has no airport rows")]
    NoEntries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_messages() {
        assert_eq!(
            PrettifyError::InputNotFound(PathBuf::from("in.txt")).to_string(),
            "Input not found"
        );
        assert_eq!(
            PrettifyError::LookupNotFound(PathBuf::from("lookup.csv")).to_string(),
            "Airport lookup not found"
        );
        assert_eq!(
            PrettifyError::from(LookupDefect::NoEntries).to_string(),
            "Airport lookup malformed"
        );
    }

    #[test]
    fn test_malformed_lookup_keeps_defect_as_source() {
        let err = PrettifyError::from(LookupDefect::EmptyField {
            line: 3,
            column: "municipality".to_string(),
        });
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("line 3 has an empty 'municipality' field")
        );
    }
}
