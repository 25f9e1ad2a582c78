//! Parser module for CHRONOREC record text

pub mod pending;
pub mod parser;

pub use pending::{PendingRecord, Slot};
pub use parser::*;
