/// CHRONOREC - sort a record file by TIME
///
/// Usage: chronorec [--check] [--json] [INPUT] [OUTPUT]

mod app;
mod config;
mod error;
mod telemetry;

use config::{CliConfig, USAGE};
use error::CliError;

fn main() {
    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(err.exit_code());
        }
    };

    if config.show_help {
        println!("{}", USAGE);
        return;
    }

    if let Err(err) = telemetry::init_tracing(config.log_format) {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }

    match app::run(&config) {
        Ok(outcome) => match outcome.written {
            Some(path) => println!("Successfully stored sorted records to {}", path.display()),
            None => println!(
                "{} is valid ({} records)",
                config.input.display(),
                outcome.records
            ),
        },
        Err(CliError::Rejected(failure)) => {
            let mut stderr = std::io::stderr().lock();
            if let Err(err) = app::report_failure(&mut stderr, &failure, config.json_diagnostics) {
                eprintln!("{}", err);
            }
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("❌ {}", err);
            std::process::exit(err.exit_code());
        }
    }
}
