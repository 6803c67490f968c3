//! Resolvers: from a token's payload to display text.
//!
//! Every resolver returns `None` when the token cannot be resolved; the
//! pipeline then keeps the matched text as written.

use std::{borrow::Cow, sync::LazyLock};

use chrono::{DateTime, FixedOffset};
use regex::Regex;

use super::token::TokenKind;
use crate::lookup::LookupTable;

/// Accepted timestamp layouts, seconds and fraction optional.
const OFFSET_DATETIME_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M:%S%.f%:z"];

// chrono skips padding and takes `+0100` or second 60, so the shape is
// checked first.
static OFFSET_DATETIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(:[0-5][0-9](\.[0-9]{1,9})?)?([+-][0-9]{2}:[0-9]{2}|Z)$",
    )
    .unwrap()
});

/// Airport display name for a short or long code, double-quoted.
pub fn resolve_code(code: &str, table: &LookupTable) -> Option<String> {
    table
        .name_of(code)
        .map(|name| quote_name(name).into_owned())
}

/// Municipality for a short or long code, unquoted.
pub fn resolve_locality(code: &str, table: &LookupTable) -> Option<String> {
    table.locality_of(code).map(str::to_string)
}

/// Wrap a name in double quotes unless it already starts or ends with one.
pub fn quote_name(name: &str) -> Cow<'_, str> {
    if name.starts_with('"') || name.ends_with('"') {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\"{}\"", name))
    }
}

/// Parse an offset date-time such as `2031-12-03T13:15:30+01:00`.
///
/// A trailing `Z` designator is read as the zero offset. Anything but
/// `YYYY-MM-DDTHH:MM[:SS[.fraction]]` followed by `±HH:MM` or `Z` is rejected.
pub fn parse_offset_datetime(payload: &str) -> Option<DateTime<FixedOffset>> {
    if !OFFSET_DATETIME_REGEX.is_match(payload) {
        return None;
    }

    let payload = match payload.strip_suffix('Z') {
        Some(rest) => Cow::Owned(format!("{}+00:00", rest)),
        None => Cow::Borrowed(payload),
    };

    OFFSET_DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(&payload, layout).ok())
}

/// Output layout for a date/time token kind.
fn timestamp_layout(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Date => Some("%d %b %Y"),
        TokenKind::LocalTime12 => Some("%I:%M%p (%:z)"),
        TokenKind::LocalTime24 => Some("%H:%M (%:z)"),
        TokenKind::UtcTime12 => Some("%I:%M%p (+00:00)"),
        TokenKind::UtcTime24 => Some("%H:%M (+00:00)"),
        TokenKind::Locality | TokenKind::LongCode | TokenKind::ShortCode => None,
    }
}

/// Reformat a timestamp payload for the given date/time token kind.
pub fn format_timestamp(kind: TokenKind, payload: &str) -> Option<String> {
    let layout = timestamp_layout(kind)?;
    let timestamp = parse_offset_datetime(payload)?;
    Some(timestamp.format(layout).to_string())
}
