//! Rewrite pipeline.
//!
//! The document is rewritten by one pass per token kind, in the fixed order
//! of [`Pass::ordered`]. Every span a pass consumes, resolved or passed
//! through, is frozen: later passes neither match inside it nor across its
//! boundaries. Whitespace normalization runs last.

mod normalize;

pub use normalize::normalize_whitespace;

use crate::{
    lookup::LookupTable,
    markup::{Palette, Pass, Recognize, TokenKind},
};

/// Result of prettifying a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub stats: RewriteStats,
}

/// Token counts of a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    pub kind: TokenKind,
    /// Tokens replaced by their display text.
    pub resolved: usize,
    /// Tokens left as written (unknown code, unparsable timestamp).
    pub passed_through: usize,
}

impl PassStats {
    fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            resolved: 0,
            passed_through: 0,
        }
    }
}

/// Per-pass token counts, in pass order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub passes: Vec<PassStats>,
}

impl RewriteStats {
    pub fn resolved(&self) -> usize {
        self.passes.iter().map(|pass| pass.resolved).sum()
    }

    pub fn passed_through(&self) -> usize {
        self.passes.iter().map(|pass| pass.passed_through).sum()
    }

    pub fn get(&self, kind: TokenKind) -> Option<&PassStats> {
        self.passes.iter().find(|pass| pass.kind == kind)
    }
}

/// Rewrite every markup token in `text` and normalize whitespace.
///
/// Never fails: unknown codes and malformed timestamps stay as written.
///
/// # Example
///
/// ```
/// use itinerary::{LookupTable, Palette, config::Columns, prettify};
///
/// let table = LookupTable::parse(
///     "name,iata_code,icao_code,municipality\nHeathrow,LHR,EGLL,London",
///     &Columns::default(),
/// )
/// .unwrap();
///
/// let rewrite = prettify("Fly #LHR, land in *##EGLL. #ZZZ stays.", &table, Palette::Plain);
/// assert_eq!(rewrite.text, "Fly \"Heathrow\", land in London. #ZZZ stays.");
/// assert_eq!(rewrite.stats.resolved(), 2);
/// assert_eq!(rewrite.stats.passed_through(), 1);
/// ```
pub fn prettify(text: &str, table: &LookupTable, palette: Palette) -> Rewrite {
    let mut document = Document::new(text);
    let passes = Pass::ordered()
        .iter()
        .map(|pass| document.apply(pass, table, palette))
        .collect();

    Rewrite {
        text: normalize_whitespace(&document.into_text()),
        stats: RewriteStats { passes },
    }
}

/// Apply a single pass to plain text, without normalization.
pub fn apply_pass(text: &str, pass: &Pass, table: &LookupTable, palette: Palette) -> String {
    let mut document = Document::new(text);
    document.apply(pass, table, palette);
    document.into_text()
}

#[derive(Debug)]
struct Segment {
    text: String,
    /// Already consumed by an earlier pass.
    frozen: bool,
}

/// Text split into open segments and frozen, already-rewritten ones.
#[derive(Debug)]
struct Document {
    segments: Vec<Segment>,
}

impl Document {
    fn new(text: &str) -> Self {
        Self {
            segments: vec![Segment {
                text: text.to_string(),
                frozen: false,
            }],
        }
    }

    fn apply(&mut self, pass: &Pass, table: &LookupTable, palette: Palette) -> PassStats {
        let mut stats = PassStats::new(pass.kind());
        let mut segments = Vec::with_capacity(self.segments.len());

        for segment in self.segments.drain(..) {
            if segment.frozen {
                segments.push(segment);
                continue;
            }

            let mut cursor = 0;
            for token in pass.tokens(&segment.text) {
                if token.span.start > cursor {
                    segments.push(Segment {
                        text: segment.text[cursor..token.span.start].to_string(),
                        frozen: false,
                    });
                }

                let text = match pass.resolve(&token, table) {
                    Some(span) => {
                        stats.resolved += 1;
                        span.render(palette)
                    }
                    None => {
                        stats.passed_through += 1;
                        token.text.to_string()
                    }
                };
                segments.push(Segment { text, frozen: true });
                cursor = token.span.end;
            }

            if cursor == 0 {
                segments.push(segment);
            } else if cursor < segment.text.len() {
                segments.push(Segment {
                    text: segment.text[cursor..].to_string(),
                    frozen: false,
                });
            }
        }

        self.segments = segments;
        stats
    }

    fn into_text(self) -> String {
        self.segments
            .into_iter()
            .map(|segment| segment.text)
            .collect()
    }
}
