//! CHRONOREC DSL - Record Text Parser, Sorter & Printer
//!
//! This crate turns `BEGIN:RECORD`/`END:RECORD` text into validated records,
//! orders them chronologically and prints them back in canonical form.
//!
//! Architecture:
//! ```text
//! Record Text
//!     ↓
//! Line Scanner (split + classify lines)
//!     ↓
//! Parser (state machine + grammar validators + date-time codec)
//!     ↓
//! Vec<Record> | ParseFailure { diagnostics }
//!     ↓
//! Sorter (by time, ascending)
//!     ↓
//! Pretty Printer (canonical text)
//! ```

pub mod datetime;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod pretty_printer;
pub mod sorter;

// Re-export key types for convenience
pub use chronorec_core::*;
pub use datetime::{format_timestamp, parse_timestamp};
pub use lexer::*;
pub use parser::*;
pub use pretty_printer::print_records;
pub use sorter::{is_chronological, sort_records};
