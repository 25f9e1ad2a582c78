//! Line token types

use std::fmt;

// ============================================================================
// PROPERTY VOCABULARY
// ============================================================================

/// The fixed set of record properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyName {
    Identifier,
    Time,
    Units,
    Weight,
    Color,
}

impl PropertyName {
    pub const ALL: [PropertyName; 5] = [
        PropertyName::Identifier,
        PropertyName::Time,
        PropertyName::Units,
        PropertyName::Weight,
        PropertyName::Color,
    ];

    /// Upper-case keyword as written before the colon.
    pub fn keyword(&self) -> &'static str {
        match self {
            PropertyName::Identifier => "IDENTIFIER",
            PropertyName::Time => "TIME",
            PropertyName::Units => "UNITS",
            PropertyName::Weight => "WEIGHT",
            PropertyName::Color => "COLOR",
        }
    }

    /// Match an already upper-cased key.
    pub fn from_keyword(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.keyword() == key)
    }

    /// Noun used in "Each record can only have 1 ..." diagnostics.
    pub fn singular_label(&self) -> &'static str {
        match self {
            PropertyName::Identifier => "identifier",
            PropertyName::Time => "date-time of creation",
            PropertyName::Units => "assigned unit",
            PropertyName::Weight => "weight",
            PropertyName::Color => "color",
        }
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// ============================================================================
// LINE TOKENS
// ============================================================================

/// Classification of one physical input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind<'a> {
    /// Empty line
    Blank,
    /// `BEGIN:RECORD`, any case
    Begin,
    /// `END:RECORD`, any case
    End,
    /// `KEY:VALUE` split on the first colon, or a colon-less line with `value: None`.
    Property {
        key: String,
        value: Option<&'a str>,
    },
}

impl LineKind<'_> {
    /// Known property named by this line, if any.
    pub fn property_name(&self) -> Option<PropertyName> {
        match self {
            LineKind::Property { key, .. } => PropertyName::from_keyword(key),
            _ => None,
        }
    }
}

/// A classified line with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct LineToken<'a> {
    pub kind: LineKind<'a>,
    pub line: usize,
    pub text: &'a str,
}
