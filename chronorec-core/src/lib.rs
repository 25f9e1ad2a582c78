//! CHRONOREC Core - Record Types
//!
//! Pure data structures shared by the parser, sorter and printer.
//! Validation of raw text lives in `chronorec-dsl`; this crate only holds
//! the validated shapes and the diagnostic types they produce.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;

pub use error::*;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Timestamp type using UTC timezone, one second resolution.
pub type Timestamp = DateTime<Utc>;

// ============================================================================
// PROPERTY VALUES
// ============================================================================

/// Unit attached to a record's weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    G,
    Oz,
    Kg,
    Lb,
}

impl Units {
    /// Every accepted unit, in the order used by diagnostics.
    pub const ALL: [Units; 4] = [Units::G, Units::Oz, Units::Kg, Units::Lb];

    /// Canonical lowercase spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::G => "g",
            Units::Oz => "oz",
            Units::Kg => "kg",
            Units::Lb => "lb",
        }
    }

    /// Case-insensitive lookup of a unit spelling.
    pub fn from_keyword(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positive, non-zero weight.
///
/// The source text is kept so printing reproduces what was read
/// (`5.` stays `5.`); equality compares the numeric value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weight {
    text: String,
    value: f64,
}

impl Weight {
    pub fn new(text: impl Into<String>, value: f64) -> Self {
        Self {
            text: text.into(),
            value,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Hexadecimal color code such as `#0a0` or `#00AA00`, stored as written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Color {}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// A fully validated record.
///
/// `units` and `weight` are either both set or both unset; the parser never
/// hands out a record that breaks this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub identifier: String,
    pub time: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Record {
    /// Record with only the required fields set.
    pub fn new(identifier: impl Into<String>, time: Timestamp) -> Self {
        Self {
            identifier: identifier.into(),
            time,
            units: None,
            weight: None,
            color: None,
        }
    }

    pub fn with_measurement(mut self, weight: Weight, units: Units) -> Self {
        self.weight = Some(weight);
        self.units = Some(units);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
