use std::sync::LazyLock;

use regex::Regex;

// Vertical tab, form feed and carriage return.
static CONTROL_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\x0B\x0C\r]+").unwrap());

static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapse stray line-control characters into newlines, then any run of
/// three or more newlines into a single blank line.
pub fn normalize_whitespace(text: &str) -> String {
    let text = CONTROL_RUN_REGEX.replace_all(text, "\n");
    BLANK_RUN_REGEX.replace_all(&text, "\n\n").into_owned()
}
