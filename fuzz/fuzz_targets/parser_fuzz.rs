//! Fuzz test for the CHRONOREC record parser
//!
//! This fuzz target feeds arbitrary text through the full pipeline to find:
//! - Panics or crashes
//! - Infinite loops in the implicit-BEGIN re-evaluation
//! - Accepted input that does not survive print → parse
//!
//! Run with: cargo +nightly fuzz run parser_fuzz -- -max_total_time=60

#![no_main]

use chronorec_dsl::{is_chronological, parse_records_text, print_records, sort_records, Location};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        match parse_records_text(input) {
            Ok(records) => {
                let printed = print_records(&records);
                let reparsed = parse_records_text(&printed);
                assert_eq!(
                    reparsed.as_ref().ok(),
                    Some(&records),
                    "Printed records should reparse"
                );

                let sorted = sort_records(records);
                assert!(is_chronological(&sorted));
            }
            Err(failure) => {
                assert!(!failure.diagnostics.is_empty(), "Failure should carry diagnostics");
                for diagnostic in &failure.diagnostics {
                    let number = match diagnostic.location {
                        Location::Line(line) => line,
                        Location::Record(record) => record,
                    };
                    assert!(number >= 1, "Locations are 1-based");
                    assert!(!diagnostic.message.is_empty());
                }
            }
        }
    }
});
