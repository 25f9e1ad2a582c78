//! Integration tests for record text parsing against fixture files
//!
//! Tests verify:
//! - Each class of malformed input rejects the whole file
//! - Well-formed files parse to the expected record count
//! - Empty input is an empty success, not a failure
//! - Sorting keeps every record and orders by time

use chronorec_dsl::*;
use chronorec_test_utils::{many_records_text, RecordTextBuilder};

// ============================================================================
// TEST FIXTURES
// ============================================================================

macro_rules! fixture {
    ($name:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/", $name))
    };
}

fn expect_failure(source: &str) -> ParseFailure {
    match parse_records_text(source) {
        Ok(records) => panic!("expected rejection, got {} records", records.len()),
        Err(failure) => failure,
    }
}

// ============================================================================
// ERROR DETECTION
// ============================================================================

#[test]
fn test_every_error_fixture_is_rejected() {
    let cases: &[(&str, &str, &str)] = &[
        (
            "no_begin",
            fixture!("no_begin.txt"),
            "Error (line #5). Each record must begin with \"BEGIN:RECORD\".",
        ),
        (
            "no_end",
            fixture!("no_end.txt"),
            "Error (line #4). Each record must end with \"END:RECORD\".",
        ),
        (
            "no_end_last",
            fixture!("no_end_last.txt"),
            "Error (line #9). Each record must end with \"END:RECORD\".",
        ),
        (
            "no_value",
            fixture!("no_value.txt"),
            "Error (line #4). Missing property value.",
        ),
        (
            "multiple_properties",
            fixture!("multiple_properties.txt"),
            "Error (line #2). Each property must be within its own line.",
        ),
        (
            "multiple_identifiers",
            fixture!("multiple_identifiers.txt"),
            "Error (line #3). Each record can only have 1 identifier.",
        ),
        (
            "multiple_times",
            fixture!("multiple_times.txt"),
            "Error (line #4). Each record can only have 1 date-time of creation.",
        ),
        (
            "multiple_units",
            fixture!("multiple_units.txt"),
            "Error (line #6). Each record can only have 1 assigned unit.",
        ),
        (
            "multiple_weights",
            fixture!("multiple_weights.txt"),
            "Error (line #5). Each record can only have 1 weight.",
        ),
        (
            "multiple_colors",
            fixture!("multiple_colors.txt"),
            "Error (line #5). Each record can only have 1 color.",
        ),
        (
            "invalid_property",
            fixture!("invalid_property.txt"),
            "Error (line #4). SHAPE is not a valid property.",
        ),
        (
            "no_identifier",
            fixture!("no_identifier.txt"),
            "Error. Record #1 does not have an identifier (IDENTIFIER:VALUE).",
        ),
        (
            "no_time",
            fixture!("no_time.txt"),
            "Error. Record #1 does not have an assigned time (TIME:YYYYMMDDTHHMMSS).",
        ),
        (
            "weight_no_units",
            fixture!("weight_no_units.txt"),
            "Error. Record #1 has an assigned weight but does not have assigned units \
             (UNITS:VALUE).",
        ),
        (
            "units_no_weight",
            fixture!("units_no_weight.txt"),
            "Error. Record #1 has assigned units but does not have an assigned weight \
             (WEIGHT:VALUE).",
        ),
        (
            "duplicate_identifier",
            fixture!("duplicate_identifier.txt"),
            "Error. Record #2 has the same identifier as Record #1.",
        ),
        (
            "invalid_time",
            fixture!("invalid_time.txt"),
            "Error (line #3). Invalid date. 1998 is not a leap year.",
        ),
        (
            "invalid_units",
            fixture!("invalid_units.txt"),
            "Error (line #5). Units must be one of the following: g,oz,kg,lb",
        ),
        (
            "invalid_weight",
            fixture!("invalid_weight.txt"),
            "Error (line #4). Weight must be a (positive, non-zero) number.",
        ),
        (
            "invalid_color",
            fixture!("invalid_color.txt"),
            "Error (line #4). Color must be a Hexadecimal Color Code (example: \"#000000\").",
        ),
    ];

    for (name, source, expected) in cases {
        let failure = expect_failure(source);
        let rendered: Vec<String> = failure.diagnostics.iter().map(ToString::to_string).collect();
        assert!(
            rendered.iter().any(|line| line == expected),
            "{}: expected {:?} in {:#?}",
            name,
            expected,
            rendered
        );
    }
}

#[test]
fn test_error_kinds() {
    assert!(expect_failure(fixture!("invalid_property.txt")).has_kind(DiagnosticKind::Schema));
    assert!(
        expect_failure(fixture!("duplicate_identifier.txt")).has_kind(DiagnosticKind::Semantic)
    );
    assert!(expect_failure(fixture!("no_begin.txt")).has_kind(DiagnosticKind::Structural));
    assert!(expect_failure(fixture!("invalid_time.txt")).has_kind(DiagnosticKind::Range));
    assert!(expect_failure(fixture!("invalid_color.txt")).has_kind(DiagnosticKind::Format));
}

#[test]
fn test_all_errors_reported_in_one_pass() {
    let source = RecordTextBuilder::new()
        .begin()
        .property("IDENTIFIER", "a")
        .property("TIME", "19981301T000000")
        .property("SIZE", "large")
        .end()
        .begin()
        .property("IDENTIFIER", "a")
        .property("WEIGHT", "1")
        .end()
        .build();

    let failure = expect_failure(&source);
    assert_eq!(
        failure.render(),
        "Error (line #3). Invalid date. Month must be a 2 digit number between 01 and 12.\n\
         Error (line #4). SIZE is not a valid property.\n\
         Error. Record #2 has the same identifier as Record #1.\n\
         Error. Record #2 does not have an assigned time (TIME:YYYYMMDDTHHMMSS).\n\
         Error. Record #2 has an assigned weight but does not have assigned units (UNITS:VALUE)."
    );
}

// ============================================================================
// SUCCESSFUL PARSES
// ============================================================================

#[test]
fn test_empty_inputs_return_empty_list() -> Result<(), ParseFailure> {
    assert!(parse_records_text(fixture!("empty.txt"))?.is_empty());
    assert!(parse_records_text(fixture!("blank_lines.txt"))?.is_empty());
    assert_eq!(sort_records_text(fixture!("empty.txt"))?, "");
    Ok(())
}

#[test]
fn test_many_records_fixture() -> Result<(), ParseFailure> {
    let records = parse_records_text(fixture!("many_records.txt"))?;
    assert_eq!(records.len(), 128);
    assert_eq!(records[0].identifier, "record-0");
    assert_eq!(records[127].identifier, "record-127");
    Ok(())
}

#[test]
fn test_generated_many_records() -> Result<(), ParseFailure> {
    let records = parse_records_text(&many_records_text(128))?;
    assert_eq!(records.len(), 128);
    Ok(())
}

#[test]
fn test_mixed_line_breaks_and_case() -> Result<(), ParseFailure> {
    let records = parse_records_text(fixture!("valid_mixed.txt"))?;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].identifier, "Widget:42");
    assert_eq!(records[0].units, Some(Units::Kg));
    assert_eq!(records[1].identifier, "widget:42");
    assert_eq!(records[2].weight.as_ref().map(Weight::as_str), Some("1."));
    Ok(())
}

// ============================================================================
// SORTING
// ============================================================================

#[test]
fn test_sorting_many_records() -> Result<(), ParseFailure> {
    let records = parse_records_text(fixture!("many_records.txt"))?;
    let sorted = sort_records(records.clone());

    assert_eq!(sorted.len(), records.len());
    assert!(is_chronological(&sorted));
    for record in &records {
        assert!(sorted.contains(record), "lost {}", record.identifier);
    }
    Ok(())
}

#[test]
fn test_sorting_with_duplicate_times() -> Result<(), ParseFailure> {
    let records = parse_records_text(fixture!("valid_mixed.txt"))?;
    let sorted = sort_records(records);

    assert!(is_chronological(&sorted));
    assert_eq!(sorted[2].identifier, "Widget:42");
    assert_eq!(sorted[0].time, sorted[1].time);
    Ok(())
}

#[test]
fn test_sorted_text_output() -> Result<(), ParseFailure> {
    let output = sort_records_text(fixture!("valid_mixed.txt"))?;
    assert!(output.ends_with(
        "BEGIN:RECORD\nIDENTIFIER:Widget:42\nTIME:20200101T101010\n\
         WEIGHT:3.75\nUNITS:kg\nCOLOR:#00ff00\nEND:RECORD"
    ));
    assert!(!output.ends_with('\n'));
    assert!(!output.contains('\r'));
    Ok(())
}
