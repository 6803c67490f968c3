//! Pattern recognizers, one per token family.
//!
//! | Token          | Syntax                          |
//! |----------------|---------------------------------|
//! | locality       | `*#LHR`, `*##EGLL`              |
//! | long code      | `##EGLL`                        |
//! | short code     | `#LHR`                          |
//! | date           | `D(2031-12-03T13:15:30+01:00)`  |
//! | local time     | `T12(...+01:00)`, `T24(...)`    |
//! | UTC time       | `T12(...Z)`, `T24(...Z)`        |

use std::{ops::Range, sync::LazyLock};

use regex::{Captures, Regex};

use super::{
    Recognize,
    resolve::{format_timestamp, resolve_code, resolve_locality},
    style::ResolvedSpan,
    token::{Token, TokenKind},
};
use crate::lookup::LookupTable;

// Long alternative first so `*##EGLL` is never read as `*#` + `#EGL`.
static LOCALITY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(##[A-Z]{4}|#[A-Z]{3})").unwrap());

static LONG_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"##([A-Z]{4})").unwrap());

static SHORT_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#([A-Z]{3})").unwrap());

// Payloads stop at the first `)` and never span lines.
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"D\(([^)\n]*)\)").unwrap());

static LOCAL_TIME_12_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"T12\(([0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}[+-][0-9]{2}:[0-9]{2})\)")
        .unwrap()
});

static LOCAL_TIME_24_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"T24\(([0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}[+-][0-9]{2}:[0-9]{2})\)")
        .unwrap()
});

static UTC_TIME_12_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"T12\(([^)\n]*Z)\)").unwrap());

static UTC_TIME_24_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"T24\(([^)\n]*Z)\)").unwrap());

/// True if the code at `span` is not glued to a further uppercase letter.
fn ends_code(text: &str, span: &Range<usize>) -> bool {
    !text[span.end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase())
}

fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

/// `*` + short or long code, resolved to the airport's municipality.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalityRef;

impl Recognize for LocalityRef {
    fn kind(&self) -> TokenKind {
        TokenKind::Locality
    }

    fn regex(&self) -> &'static Regex {
        &*LOCALITY_REGEX
    }

    fn accepts(&self, text: &str, span: &Range<usize>) -> bool {
        ends_code(text, span)
    }

    fn payload<'t>(&self, caps: &Captures<'t>) -> Option<&'t str> {
        group(caps, 1).map(|code| code.trim_start_matches('#'))
    }

    fn resolve(&self, token: &Token<'_>, table: &LookupTable) -> Option<ResolvedSpan> {
        resolve_locality(token.payload, table)
            .map(|city| ResolvedSpan::new(city, self.kind().color()))
    }
}

/// `##` + 4-letter ICAO code.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongCode;

impl Recognize for LongCode {
    fn kind(&self) -> TokenKind {
        TokenKind::LongCode
    }

    fn regex(&self) -> &'static Regex {
        &*LONG_CODE_REGEX
    }

    fn accepts(&self, text: &str, span: &Range<usize>) -> bool {
        ends_code(text, span)
    }

    fn payload<'t>(&self, caps: &Captures<'t>) -> Option<&'t str> {
        group(caps, 1)
    }

    fn resolve(&self, token: &Token<'_>, table: &LookupTable) -> Option<ResolvedSpan> {
        resolve_code(token.payload, table).map(|name| ResolvedSpan::new(name, self.kind().color()))
    }
}

/// `#` + 3-letter IATA code.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortCode;

impl Recognize for ShortCode {
    fn kind(&self) -> TokenKind {
        TokenKind::ShortCode
    }

    fn regex(&self) -> &'static Regex {
        &*SHORT_CODE_REGEX
    }

    /// Rejects the tail of a long-code marker such as `##ABC`.
    fn accepts(&self, text: &str, span: &Range<usize>) -> bool {
        !text[..span.start].ends_with('#') && ends_code(text, span)
    }

    fn payload<'t>(&self, caps: &Captures<'t>) -> Option<&'t str> {
        group(caps, 1)
    }

    fn resolve(&self, token: &Token<'_>, table: &LookupTable) -> Option<ResolvedSpan> {
        resolve_code(token.payload, table).map(|name| ResolvedSpan::new(name, self.kind().color()))
    }
}

/// `D(...)` calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarDate;

impl Recognize for CalendarDate {
    fn kind(&self) -> TokenKind {
        TokenKind::Date
    }

    fn regex(&self) -> &'static Regex {
        &*DATE_REGEX
    }

    fn payload<'t>(&self, caps: &Captures<'t>) -> Option<&'t str> {
        group(caps, 1)
    }

    fn resolve(&self, token: &Token<'_>, _table: &LookupTable) -> Option<ResolvedSpan> {
        format_timestamp(self.kind(), token.payload)
            .map(|date| ResolvedSpan::new(date, self.kind().color()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    H12,
    H24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Numeric offset such as `+01:00`.
    Local,
    /// `Z` designator.
    Utc,
}

/// `T12(...)` / `T24(...)` wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct ClockTime {
    pub clock: Clock,
    pub zone: Zone,
}

impl ClockTime {
    pub fn new(clock: Clock, zone: Zone) -> Self {
        Self { clock, zone }
    }
}

impl Recognize for ClockTime {
    fn kind(&self) -> TokenKind {
        match (self.zone, self.clock) {
            (Zone::Local, Clock::H12) => TokenKind::LocalTime12,
            (Zone::Local, Clock::H24) => TokenKind::LocalTime24,
            (Zone::Utc, Clock::H12) => TokenKind::UtcTime12,
            (Zone::Utc, Clock::H24) => TokenKind::UtcTime24,
        }
    }

    fn regex(&self) -> &'static Regex {
        match (self.zone, self.clock) {
            (Zone::Local, Clock::H12) => &*LOCAL_TIME_12_REGEX,
            (Zone::Local, Clock::H24) => &*LOCAL_TIME_24_REGEX,
            (Zone::Utc, Clock::H12) => &*UTC_TIME_12_REGEX,
            (Zone::Utc, Clock::H24) => &*UTC_TIME_24_REGEX,
        }
    }

    fn payload<'t>(&self, caps: &Captures<'t>) -> Option<&'t str> {
        group(caps, 1)
    }

    fn resolve(&self, token: &Token<'_>, _table: &LookupTable) -> Option<ResolvedSpan> {
        format_timestamp(self.kind(), token.payload)
            .map(|time| ResolvedSpan::new(time, self.kind().color()))
    }
}
