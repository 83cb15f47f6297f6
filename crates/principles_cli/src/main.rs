//! Administration console entry point.
//!
//! # Responsibility
//! - Verify the store is reachable before accepting commands.
//! - Run the console over stdin/stdout.
//!
//! Logging is file-only here, and only when `PRINCIPLES_LOG_DIR` is set, so
//! log lines never interleave with the interactive transcript.

mod command;
mod console;

use console::Console;
use log::{error, info};
use principles_core::{core_version, init_logging, with_store, CatalogConfig};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CatalogConfig::from_env();

    if let Some(sink) = config.log_sink() {
        if let Err(err) = init_logging(&config.log_level, sink) {
            eprintln!("logging disabled: {err}");
        }
    }

    if let Err(err) = with_store(&config.db_path, |_| Ok(())) {
        error!(
            "event=console_start module=cli status=error error_code={} error={}",
            err.code(),
            err
        );
        eprintln!("Failed to connect to the database: {err}");
        return ExitCode::FAILURE;
    }
    info!(
        "event=console_start module=cli status=ok version={} db_path={}",
        core_version(),
        config.db_path.display()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config.db_path);
    match console.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=console_io module=cli status=error error={err}");
            eprintln!("console I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}
