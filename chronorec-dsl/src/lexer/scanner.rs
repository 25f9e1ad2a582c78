//! Line scanner implementation

use super::token::*;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("Invalid line break regex"));

const BEGIN_MARKER: &str = "BEGIN:RECORD";
const END_MARKER: &str = "END:RECORD";

// ============================================================================
// LEXER IMPLEMENTATION
// ============================================================================

/// Splits record text into classified lines.
pub struct Lexer<'a> {
    source: &'a str,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source.
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Classify every line. `\r\n`, `\r` and `\n` all end a line.
    pub fn tokenize(&self) -> Vec<LineToken<'a>> {
        LINE_BREAK
            .split(self.source)
            .enumerate()
            .map(|(index, text)| LineToken {
                kind: classify_line(text),
                line: index + 1,
                text,
            })
            .collect()
    }
}

/// Classify a single line without its terminator.
pub fn classify_line(text: &str) -> LineKind<'_> {
    if text.is_empty() {
        return LineKind::Blank;
    }
    if text.eq_ignore_ascii_case(BEGIN_MARKER) {
        return LineKind::Begin;
    }
    if text.eq_ignore_ascii_case(END_MARKER) {
        return LineKind::End;
    }

    match text.split_once(':') {
        Some((key, value)) => LineKind::Property {
            key: key.to_uppercase(),
            value: Some(value),
        },
        None => LineKind::Property {
            key: text.to_uppercase(),
            value: None,
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
