//! Read → parse → sort → write

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use chronorec_core::ParseFailure;
use chronorec_dsl::{parse_records_text, print_records, sort_records};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub records: usize,
    /// Where the sorted records were written; `None` in check-only mode.
    pub written: Option<PathBuf>,
}

/// Validate the input file and, unless checking only, write the sorted file.
/// Nothing is written when the input is rejected.
pub fn run(config: &CliConfig) -> CliResult<RunOutcome> {
    let source = fs::read_to_string(&config.input).map_err(|source| CliError::Read {
        path: config.input.clone(),
        source,
    })?;

    let records = parse_records_text(&source).map_err(|failure| {
        warn!(
            input = %config.input.display(),
            diagnostics = failure.diagnostics.len(),
            "record file rejected"
        );
        failure
    })?;
    let count = records.len();

    if config.check_only {
        info!(input = %config.input.display(), records = count, "record file is valid");
        return Ok(RunOutcome {
            records: count,
            written: None,
        });
    }

    let output = print_records(&sort_records(records));
    fs::write(&config.output, output).map_err(|source| CliError::Write {
        path: config.output.clone(),
        source,
    })?;
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        records = count,
        "sorted records written"
    );

    Ok(RunOutcome {
        records: count,
        written: Some(config.output.clone()),
    })
}

/// Print every diagnostic, as text lines or a JSON array.
pub fn report_failure<W: Write>(out: &mut W, failure: &ParseFailure, json: bool) -> CliResult<()> {
    let write_err = |source: std::io::Error| CliError::Write {
        path: PathBuf::from("<stderr>"),
        source,
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &failure.diagnostics)?;
        writeln!(out).map_err(write_err)?;
    } else {
        for diagnostic in &failure.diagnostics {
            writeln!(out, "{}", diagnostic).map_err(write_err)?;
        }
    }
    Ok(())
}
