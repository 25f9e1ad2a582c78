//! Error and diagnostic types for CHRONOREC parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// VALUE ERRORS
// ============================================================================

/// Date-time token errors. Messages are user-facing and matched by tooling.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("Incorrect format. Please input in following form: YYYYMMDDTHHMMSS")]
    IncorrectFormat,

    #[error("Invalid date. Year must be a 4 digit number between 0001 and 9999.")]
    InvalidYear,

    #[error("Invalid date. Month must be a 2 digit number between 01 and 12.")]
    InvalidMonth,

    #[error("Invalid date. Day of month cannot be 0.")]
    ZeroDay,

    #[error("Invalid date. {year} is not a leap year.")]
    NotLeapYear { year: String },

    #[error("Invalid date. February, {year} only has {days} days.")]
    FebruaryOverflow { year: String, days: u32 },

    #[error("Invalid date. {month} only has {days} days.")]
    MonthOverflow { month: &'static str, days: u32 },

    #[error("Invalid time. Hour must be a 2 digit number between 00 and 23.")]
    InvalidHour,

    #[error("Invalid time. Minute must be a 2 digit number between 00 and 59.")]
    InvalidMinute,

    #[error("Invalid time. Second must be a 2 digit number between 00 and 59.")]
    InvalidSecond,
}

impl DateTimeError {
    /// Malformed tokens are format errors; everything else is a field out of range.
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            DateTimeError::IncorrectFormat => DiagnosticKind::Format,
            _ => DiagnosticKind::Range,
        }
    }
}

/// Property value errors raised by the grammar validators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error(transparent)]
    Time(#[from] DateTimeError),

    #[error("Units must be one of the following: g,oz,kg,lb")]
    InvalidUnits { value: String },

    #[error("Weight must be a (positive, non-zero) number.")]
    InvalidWeight { value: String },

    #[error("Color must be a Hexadecimal Color Code (example: \"#000000\").")]
    InvalidColor { value: String },
}

impl PropertyError {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            PropertyError::Time(err) => err.kind(),
            _ => DiagnosticKind::Format,
        }
    }
}

// ============================================================================
// DIAGNOSTICS
// ============================================================================

/// Error taxonomy for accumulated diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Malformed date-time token or property value
    Format,
    /// Calendar or clock field out of range
    Range,
    /// Missing BEGIN/END, duplicate field, multi-property line, missing value
    Structural,
    /// Missing required field, weight/units mismatch, duplicate identifier
    Semantic,
    /// Unrecognized property keyword
    Schema,
}

/// Where a diagnostic points: a 1-based input line or a 1-based record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "at", content = "number", rename_all = "snake_case")]
pub enum Location {
    Line(usize),
    Record(usize),
}

/// One detected violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub location: Location,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn at_line(line: usize, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            location: Location::Line(line),
            kind,
            message: message.into(),
        }
    }

    pub fn at_record(record: usize, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            location: Location::Record(record),
            kind,
            message: message.into(),
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self.location {
            Location::Line(line) => Some(line),
            Location::Record(_) => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Location::Line(line) => write!(f, "Error (line #{}). {}", line, self.message),
            Location::Record(_) => write!(f, "Error. {}", self.message),
        }
    }
}

/// The whole input was rejected. There is no partial result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("record input rejected with {} diagnostic(s)", .diagnostics.len())]
pub struct ParseFailure {
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseFailure {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Every diagnostic on its own line, in detection order.
    pub fn render(&self) -> String {
        self.diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn has_kind(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }

    pub fn contains_message(&self, message: &str) -> bool {
        self.diagnostics.iter().any(|d| d.message == message)
    }
}

pub type ParseResult<T> = Result<T, ParseFailure>;
