use std::{fmt, ops::Range};

use super::style::Color;

/// Kinds of markup tokens, in pipeline precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// `*#LHR` or `*##EGLL`
    Locality,
    /// `##EGLL`
    LongCode,
    /// `#LHR`
    ShortCode,
    /// `D(2031-12-03T13:15:30+01:00)`
    Date,
    /// `T12(2031-12-03T13:15+01:00)`
    LocalTime12,
    /// `T24(2031-12-03T13:15+01:00)`
    LocalTime24,
    /// `T12(2031-12-03T13:15Z)`
    UtcTime12,
    /// `T24(2031-12-03T13:15Z)`
    UtcTime24,
}

impl TokenKind {
    pub fn color(self) -> Color {
        match self {
            Self::Locality => Color::Purple,
            Self::LongCode | Self::ShortCode => Color::Blue,
            Self::Date => Color::Yellow,
            Self::LocalTime12 => Color::Red,
            Self::LocalTime24 => Color::Green,
            Self::UtcTime12 => Color::Purple,
            Self::UtcTime24 => Color::Blue,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Locality => "locality",
            Self::LongCode => "long-code",
            Self::ShortCode => "short-code",
            Self::Date => "date",
            Self::LocalTime12 => "local-time-12",
            Self::LocalTime24 => "local-time-24",
            Self::UtcTime12 => "utc-time-12",
            Self::UtcTime24 => "utc-time-24",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized markup token, borrowed from the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'t> {
    pub kind: TokenKind,
    /// The whole matched text, markup included.
    pub text: &'t str,
    /// The airport code or the timestamp inside the markup.
    pub payload: &'t str,
    /// Byte range of `text` in the scanned text.
    pub span: Range<usize>,
}
