//! CHRONOREC Test Utilities
//!
//! Centralized test infrastructure for the CHRONOREC workspace:
//! - Proptest generators for records and their property values
//! - A fluent builder for record text fixtures

pub use chronorec_core::{Color, Record, Timestamp, Units, Weight};

use chrono::{Datelike, TimeZone, Timelike, Utc};
use proptest::prelude::*;

/// 0001-01-01T00:00:00Z
pub const MIN_TIMESTAMP_SECS: i64 = -62_135_596_800;
/// 9999-12-31T23:59:59Z
pub const MAX_TIMESTAMP_SECS: i64 = 253_402_300_799;

// ============================================================================
// GENERATORS
// ============================================================================

/// Any whole-second instant in years 0001..=9999.
pub fn arb_timestamp() -> impl Strategy<Value = Timestamp> {
    (MIN_TIMESTAMP_SECS..=MAX_TIMESTAMP_SECS)
        .prop_filter_map("representable instant", |secs| Utc.timestamp_opt(secs, 0).single())
}

pub fn arb_units() -> impl Strategy<Value = Units> {
    prop_oneof![
        Just(Units::G),
        Just(Units::Oz),
        Just(Units::Kg),
        Just(Units::Lb),
    ]
}

/// Positive weights written as `N`, `N.` or `N.DDD`.
pub fn arb_weight() -> impl Strategy<Value = Weight> {
    let text = prop_oneof![
        (1u32..100_000).prop_map(|whole| whole.to_string()),
        (1u32..100_000).prop_map(|whole| format!("{}.", whole)),
        (0u32..1000, 1u32..1000).prop_map(|(whole, frac)| format!("{}.{:03}", whole, frac)),
    ];
    text.prop_filter_map("positive weight", |text| {
        let value: f64 = text.parse().ok()?;
        (value > 0.0).then(|| Weight::new(text, value))
    })
}

pub fn arb_color() -> impl Strategy<Value = Color> {
    "#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})".prop_map(Color::new)
}

/// Identifiers that can never be mistaken for another property.
pub fn arb_identifier() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}"
}

pub fn arb_record() -> impl Strategy<Value = Record> {
    (
        arb_identifier(),
        arb_timestamp(),
        prop::option::of((arb_weight(), arb_units())),
        prop::option::of(arb_color()),
    )
        .prop_map(|(identifier, time, measurement, color)| {
            let mut record = Record::new(identifier, time);
            if let Some((weight, units)) = measurement {
                record = record.with_measurement(weight, units);
            }
            record.color = color;
            record
        })
}

/// Records whose identifiers are unique (an index suffix is appended).
pub fn arb_unique_records(max_len: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(arb_record(), 0..=max_len).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(index, mut record)| {
                record.identifier = format!("{}-{}", record.identifier, index);
                record
            })
            .collect()
    })
}

// ============================================================================
// TEXT FIXTURES
// ============================================================================

/// Format an instant as `YYYYMMDDTHHMMSS` without going through the parser crate.
pub fn time_token(time: &Timestamp) -> String {
    format!(
        "{:04}{:02}{:02}T{:02}{:02}{:02}",
        time.year(),
        time.month(),
        time.day(),
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Builder for record text (fluent API).
#[derive(Debug, Default, Clone)]
pub struct RecordTextBuilder {
    lines: Vec<String>,
}

impl RecordTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(mut self) -> Self {
        self.lines.push("BEGIN:RECORD".to_string());
        self
    }

    pub fn end(mut self) -> Self {
        self.lines.push("END:RECORD".to_string());
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    pub fn property(mut self, key: &str, value: &str) -> Self {
        self.lines.push(format!("{}:{}", key, value));
        self
    }

    /// Push a raw line verbatim.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// A complete block with only the required properties.
    pub fn minimal_record(self, identifier: &str, time: &str) -> Self {
        self.begin()
            .property("IDENTIFIER", identifier)
            .property("TIME", time)
            .end()
    }

    /// A complete block for an existing record, properties in the given order.
    pub fn record(self, record: &Record) -> Self {
        let mut builder = self
            .begin()
            .property("IDENTIFIER", &record.identifier)
            .property("TIME", &time_token(&record.time));
        if let Some(units) = &record.units {
            builder = builder.property("UNITS", units.as_str());
        }
        if let Some(weight) = &record.weight {
            builder = builder.property("WEIGHT", weight.as_str());
        }
        if let Some(color) = &record.color {
            builder = builder.property("COLOR", color.as_str());
        }
        builder.end()
    }

    pub fn build(&self) -> String {
        self.build_with_break("\n")
    }

    pub fn build_with_break(&self, line_break: &str) -> String {
        self.lines.join(line_break)
    }
}

/// `count` well-formed records with distinct identifiers and scattered times.
pub fn many_records_text(count: usize) -> String {
    (0..count)
        .fold(RecordTextBuilder::new(), |builder, index| {
            // Reverse-ish order with repeats so sorting has work to do.
            let year = 2000 + (count - index) % 23;
            let day = 1 + index % 28;
            builder.minimal_record(
                &format!("record-{}", index),
                &format!("{:04}03{:02}T1200{:02}", year, day, index % 60),
            )
        })
        .build()
}
