//! Chronological ordering of validated records

use chronorec_core::Record;

/// Sort records by `time`, earliest first.
///
/// The sort is stable, so records sharing an instant keep their input order.
/// Field values are untouched.
pub fn sort_records(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by_key(|record| record.time);
    records
}

/// True when every record's time is `<=` the next one's.
pub fn is_chronological(records: &[Record]) -> bool {
    records.windows(2).all(|pair| pair[0].time <= pair[1].time)
}
