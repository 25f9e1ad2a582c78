//! Pretty printer for CHRONOREC records

use crate::datetime::format_timestamp;
use chronorec_core::Record;

/// Print records in canonical form.
///
/// One `BEGIN:RECORD` ... `END:RECORD` block per record, `\n` between lines
/// and no trailing line break. Properties come out in a fixed order:
/// IDENTIFIER, TIME, WEIGHT, UNITS, COLOR.
///
/// Units are written in their canonical lowercase spelling (`KG` prints as
/// `kg`). Weight and color are written exactly as they were read.
pub fn print_records(records: &[Record]) -> String {
    records
        .iter()
        .map(print_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a single record block without a trailing line break.
pub fn print_record(record: &Record) -> String {
    let mut result = String::from("BEGIN:RECORD\n");
    result.push_str(&format!("IDENTIFIER:{}\n", record.identifier));
    result.push_str(&format!("TIME:{}\n", format_timestamp(&record.time)));

    if let Some(weight) = &record.weight {
        result.push_str(&format!("WEIGHT:{}\n", weight));
        if let Some(units) = &record.units {
            result.push_str(&format!("UNITS:{}\n", units));
        }
    }
    if let Some(color) = &record.color {
        result.push_str(&format!("COLOR:{}\n", color));
    }

    result.push_str("END:RECORD");
    result
}

// ============================================================================
// TESTS
// ============================================================================
