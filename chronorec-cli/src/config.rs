//! CLI Configuration Module
//!
//! Resolution order for every setting: command-line argument, then
//! environment variable, then default.

use crate::error::{CliError, CliResult};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "records.txt";
pub const DEFAULT_OUTPUT: &str = "sortedRecords.txt";

pub const USAGE: &str = "\
Usage: chronorec [OPTIONS] [INPUT] [OUTPUT]

Validate a record file, sort its records by TIME and write them to OUTPUT.

Arguments:
  INPUT    Record file to read    (env CHRONOREC_INPUT,  default records.txt)
  OUTPUT   File to write          (env CHRONOREC_OUTPUT, default sortedRecords.txt)

Options:
  --check  Validate only, do not write OUTPUT
  --json   Print diagnostics as JSON
  -h, --help  Show this message

Environment:
  CHRONOREC_LOG_FORMAT  text | json (default text)
  RUST_LOG              tracing filter (default chronorec=info)";

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> CliResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(CliError::Usage(format!(
                "CHRONOREC_LOG_FORMAT must be text or json, got '{}'",
                other
            ))),
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_format: LogFormat,
    /// Print diagnostics as JSON instead of `Error (line #N)` lines.
    pub json_diagnostics: bool,
    /// Validate without writing the output file.
    pub check_only: bool,
    pub show_help: bool,
}

impl CliConfig {
    /// Create CliConfig from the process arguments and environment.
    ///
    /// Environment variables:
    /// - `CHRONOREC_INPUT`: input path (default: records.txt)
    /// - `CHRONOREC_OUTPUT`: output path (default: sortedRecords.txt)
    /// - `CHRONOREC_LOG_FORMAT`: "text" or "json" (default: text)
    pub fn from_env() -> CliResult<Self> {
        Self::resolve(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Resolve from explicit arguments and an environment lookup.
    pub fn resolve<I, S, F>(args: I, env: F) -> CliResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut positional = Vec::new();
        let mut json_diagnostics = false;
        let mut check_only = false;
        let mut show_help = false;

        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "--json" => json_diagnostics = true,
                "--check" => check_only = true,
                "-h" | "--help" => show_help = true,
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(CliError::Usage(format!("unknown option '{}'", flag)));
                }
                _ => positional.push(arg),
            }
        }

        if positional.len() > 2 {
            return Err(CliError::Usage(format!(
                "expected at most 2 paths, got {}",
                positional.len()
            )));
        }

        let mut positional = positional.into_iter();
        let input = positional
            .next()
            .or_else(|| env("CHRONOREC_INPUT"))
            .unwrap_or_else(|| DEFAULT_INPUT.to_string());
        let output = positional
            .next()
            .or_else(|| env("CHRONOREC_OUTPUT"))
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
        let log_format = match env("CHRONOREC_LOG_FORMAT") {
            Some(value) => LogFormat::parse(&value)?,
            None => LogFormat::Text,
        };

        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            log_format,
            json_diagnostics,
            check_only,
            show_help,
        })
    }
}
