//! Markup grammar: token matchers and their resolvers.
//!
//! Every token family implements [`Recognize`], a single
//! match → resolve → render contract. [`Pass`] is the closed set of families
//! and fixes the order in which the rewrite pipeline applies them.

pub mod matchers;
pub mod resolve;
pub mod style;
pub mod token;

use std::ops::Range;

use enum_dispatch::enum_dispatch;
use regex::{Captures, Regex};

pub use matchers::{CalendarDate, Clock, ClockTime, LocalityRef, LongCode, ShortCode, Zone};
pub use style::{Color, Palette, RESET, ResolvedSpan};
pub use token::{Token, TokenKind};

use crate::lookup::LookupTable;

/// Recognizes one token family in free text and resolves its tokens.
#[enum_dispatch]
pub trait Recognize {
    fn kind(&self) -> TokenKind;

    fn regex(&self) -> &'static Regex;

    /// Extra context check on a regex match, `span` being the whole match.
    fn accepts(&self, _text: &str, _span: &Range<usize>) -> bool {
        true
    }

    /// The code or timestamp carried by a match.
    fn payload<'t>(&self, caps: &Captures<'t>) -> Option<&'t str>;

    /// Display text for a token; `None` leaves the token as written.
    fn resolve(&self, token: &Token<'_>, table: &LookupTable) -> Option<ResolvedSpan>;
}

/// One rewrite pass over the document.
#[enum_dispatch(Recognize)]
#[derive(Debug, Clone, Copy)]
pub enum Pass {
    Locality(LocalityRef),
    LongCode(LongCode),
    ShortCode(ShortCode),
    Date(CalendarDate),
    Time(ClockTime),
}

impl Pass {
    /// All passes in precedence order.
    ///
    /// Locality references go first because they wrap a code token; long
    /// codes go before short codes so `##EGLL` is consumed whole.
    pub fn ordered() -> [Pass; 8] {
        [
            LocalityRef.into(),
            LongCode.into(),
            ShortCode.into(),
            CalendarDate.into(),
            ClockTime::new(Clock::H12, Zone::Local).into(),
            ClockTime::new(Clock::H24, Zone::Local).into(),
            ClockTime::new(Clock::H12, Zone::Utc).into(),
            ClockTime::new(Clock::H24, Zone::Utc).into(),
        ]
    }

    /// Lazily scan `text` for this pass's tokens, left to right.
    ///
    /// Tokens never overlap. Each call starts a fresh scan.
    pub fn tokens<'t>(&self, text: &'t str) -> impl Iterator<Item = Token<'t>> {
        self.regex().captures_iter(text).filter_map(move |caps| {
            let whole = caps.get(0)?;
            let span = whole.range();
            if !self.accepts(text, &span) {
                return None;
            }
            Some(Token {
                kind: self.kind(),
                text: whole.as_str(),
                payload: self.payload(&caps)?,
                span,
            })
        })
    }
}
