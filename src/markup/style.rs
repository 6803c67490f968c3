//! ANSI styling of substituted spans.
//!
//! Document colors are part of the output text itself, so they are written
//! as raw escape sequences and do not follow the console's color detection.

pub const RESET: &str = "\u{1b}[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
}

impl Color {
    /// Bold foreground escape sequence.
    pub fn escape(self) -> &'static str {
        match self {
            Self::Red => "\u{1b}[1;31m",
            Self::Green => "\u{1b}[1;32m",
            Self::Yellow => "\u{1b}[1;33m",
            Self::Blue => "\u{1b}[1;34m",
            Self::Purple => "\u{1b}[1;35m",
        }
    }
}

/// How resolved spans are written into the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Wrap every span in its color escape and a reset.
    #[default]
    Ansi,
    /// Write the replacement text only.
    Plain,
}

/// Replacement text for a token plus the color it is rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    pub text: String,
    pub color: Color,
}

impl ResolvedSpan {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    pub fn render(&self, palette: Palette) -> String {
        match palette {
            Palette::Ansi => format!("{}{}{}", self.color.escape(), self.text, RESET),
            Palette::Plain => self.text.clone(),
        }
    }
}
