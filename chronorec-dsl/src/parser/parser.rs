//! Parser implementation

use super::pending::PendingRecord;
use crate::grammar::{contains_property_token, validate_property};
use crate::lexer::*;
use crate::pretty_printer::print_records;
use crate::sorter::sort_records;
use chronorec_core::{Diagnostic, DiagnosticKind, ParseFailure, ParseResult, Record};
use tracing::{debug, trace};

const MISSING_END: &str = "Each record must end with \"END:RECORD\".";
const MISSING_BEGIN: &str = "Each record must begin with \"BEGIN:RECORD\".";
const MISSING_VALUE: &str = "Missing property value.";
const SHARED_LINE: &str = "Each property must be within its own line.";

// ============================================================================
// PARSER STATE
// ============================================================================

/// Where the scanner is relative to a `BEGIN:RECORD`/`END:RECORD` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    OutsideRecord,
    InsideRecord,
}

/// What to do with the current line after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Advance,
    /// Evaluate the same line again in the new state.
    Reprocess,
}

/// Validating parser for record text.
///
/// All state lives on the value, so every parse is independent.
pub struct Parser<'a> {
    tokens: Vec<LineToken<'a>>,
    state: ParserState,
    current: Option<PendingRecord>,
    closed: Vec<PendingRecord>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    /// Create a new parser from classified lines.
    pub fn new(tokens: Vec<LineToken<'a>>) -> Self {
        Self {
            tokens,
            state: ParserState::OutsideRecord,
            current: None,
            closed: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run the state machine over every line, then check each record for
    /// completeness. Any diagnostic rejects the whole input.
    pub fn parse(mut self) -> ParseResult<Vec<Record>> {
        let tokens = std::mem::take(&mut self.tokens);
        let line_count = tokens.len();

        let mut index = 0;
        while let Some(token) = tokens.get(index) {
            match self.step(token) {
                Step::Advance => index += 1,
                Step::Reprocess => trace!(line = token.line, "re-evaluating line inside record"),
            }
        }

        if self.state == ParserState::InsideRecord {
            // Points at the last line of input, not the line past it.
            self.error(Diagnostic::at_line(
                line_count,
                DiagnosticKind::Structural,
                MISSING_END,
            ));
        }

        let mut records = std::mem::take(&mut self.closed);
        records.extend(self.current.take());
        self.check_completeness(&records);

        debug!(
            lines = line_count,
            records = records.len(),
            diagnostics = self.diagnostics.len(),
            "record parse finished"
        );

        if !self.diagnostics.is_empty() {
            return Err(ParseFailure::new(self.diagnostics));
        }

        // With no diagnostics every pending record is complete and valid.
        Ok(records
            .into_iter()
            .filter_map(PendingRecord::into_record)
            .collect())
    }

    /// Current state of the machine.
    pub fn state(&self) -> ParserState {
        self.state
    }

    fn step(&mut self, token: &LineToken<'_>) -> Step {
        match (&token.kind, self.state) {
            (LineKind::Blank, _) => Step::Advance,
            (LineKind::Begin, ParserState::InsideRecord) => {
                // Points at the BEGIN line that interrupted the record.
                self.error(Diagnostic::at_line(
                    token.line,
                    DiagnosticKind::Structural,
                    MISSING_END,
                ));
                self.open_record(token.line);
                Step::Advance
            }
            (LineKind::Begin, ParserState::OutsideRecord) => {
                self.open_record(token.line);
                Step::Advance
            }
            (_, ParserState::OutsideRecord) => {
                self.error(Diagnostic::at_line(
                    token.line,
                    DiagnosticKind::Structural,
                    MISSING_BEGIN,
                ));
                self.open_record(token.line);
                Step::Reprocess
            }
            (LineKind::End, ParserState::InsideRecord) => {
                self.close_record(token.line);
                Step::Advance
            }
            (LineKind::Property { key, value }, ParserState::InsideRecord) => {
                self.property(token.line, key, *value);
                Step::Advance
            }
        }
    }

    /// Start a fresh pending record. An unfinished one is dropped.
    fn open_record(&mut self, line: usize) {
        if self.current.replace(PendingRecord::default()).is_some() {
            debug!(line, "unfinished record discarded by new BEGIN:RECORD");
        }
        self.state = ParserState::InsideRecord;
    }

    fn close_record(&mut self, line: usize) {
        if let Some(record) = self.current.take() {
            self.closed.push(record);
        }
        self.state = ParserState::OutsideRecord;
        trace!(line, record = self.closed.len(), "record closed");
    }

    fn property(&mut self, line: usize, key: &str, value: Option<&str>) {
        let name = PropertyName::from_keyword(key);

        let value = match (value, name) {
            (Some(value), _) if !value.is_empty() => value,
            (Some(_), _) | (None, Some(_)) => {
                self.error(Diagnostic::at_line(
                    line,
                    DiagnosticKind::Structural,
                    MISSING_VALUE,
                ));
                return;
            }
            (None, None) => {
                self.error(unknown_property(line, key));
                return;
            }
        };

        if contains_property_token(value) {
            self.error(Diagnostic::at_line(
                line,
                DiagnosticKind::Structural,
                SHARED_LINE,
            ));
            return;
        }

        let Some(name) = name else {
            self.error(unknown_property(line, key));
            return;
        };

        let Some(record) = self.current.as_mut() else {
            return;
        };

        if record.is_set(name) {
            self.error(Diagnostic::at_line(
                line,
                DiagnosticKind::Structural,
                format!("Each record can only have 1 {}.", name.singular_label()),
            ));
            return;
        }

        match validate_property(name, value) {
            Ok(parsed) => record.fill(parsed),
            Err(err) => {
                record.reject(name);
                self.error(Diagnostic::at_line(line, err.kind(), err.to_string()));
            }
        }

        if name == PropertyName::Identifier {
            self.check_duplicate_identifier(value);
        }
    }

    /// Compare against records that are already closed, newest first.
    fn check_duplicate_identifier(&mut self, identifier: &str) {
        let current = self.closed.len() + 1;
        let duplicates: Vec<usize> = self
            .closed
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, record)| record.identifier() == Some(identifier))
            .map(|(index, _)| index + 1)
            .collect();

        for earlier in duplicates {
            self.error(Diagnostic::at_record(
                current,
                DiagnosticKind::Semantic,
                format!(
                    "Record #{} has the same identifier as Record #{}.",
                    current, earlier
                ),
            ));
        }
    }

    fn check_completeness(&mut self, records: &[PendingRecord]) {
        for (index, record) in records.iter().enumerate() {
            let number = index + 1;
            let has_units = record.units.is_present();
            let has_weight = record.weight.is_present();

            if !record.identifier.is_present() {
                self.missing(number, "does not have an identifier (IDENTIFIER:VALUE)");
            }
            if !record.time.is_present() {
                self.missing(number, "does not have an assigned time (TIME:YYYYMMDDTHHMMSS)");
            }
            if has_weight && !has_units {
                self.missing(
                    number,
                    "has an assigned weight but does not have assigned units (UNITS:VALUE)",
                );
            }
            if has_units && !has_weight {
                self.missing(
                    number,
                    "has assigned units but does not have an assigned weight (WEIGHT:VALUE)",
                );
            }
        }
    }

    fn missing(&mut self, record: usize, detail: &str) {
        self.error(Diagnostic::at_record(
            record,
            DiagnosticKind::Semantic,
            format!("Record #{} {}.", record, detail),
        ));
    }

    fn error(&mut self, diagnostic: Diagnostic) {
        debug!(diagnostic = %diagnostic, "record diagnostic");
        self.diagnostics.push(diagnostic);
    }
}

fn unknown_property(line: usize, key: &str) -> Diagnostic {
    Diagnostic::at_line(
        line,
        DiagnosticKind::Schema,
        format!("{} is not a valid property.", key),
    )
}

// ============================================================================
// CONVENIENCE FUNCTIONS
// ============================================================================

/// Parse record text into validated records, in input order.
pub fn parse_records_text(source: &str) -> ParseResult<Vec<Record>> {
    let tokens = Lexer::new(source).tokenize();
    Parser::new(tokens).parse()
}

/// Parse and print without reordering (for round-trip testing).
pub fn round_trip(source: &str) -> ParseResult<String> {
    let records = parse_records_text(source)?;
    Ok(print_records(&records))
}

/// Parse, sort chronologically and print.
pub fn sort_records_text(source: &str) -> ParseResult<String> {
    let records = sort_records(parse_records_text(source)?);
    Ok(print_records(&records))
}

// ============================================================================
// TESTS
// ============================================================================
