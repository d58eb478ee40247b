//! contactbook CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments and dispatches (via cli::run)
//! 2. Logs startup failures to stderr as a FATAL event
//! 3. Exits with non-zero on failure
//!
//! All logic is delegated to the CLI module.

use contactbook::cli;
use contactbook::observability::{log_event_with_fields, Event};

fn main() {
    if let Err(e) = cli::run() {
        log_event_with_fields(Event::BootFailed, &[("error", e.to_string().as_str())]);
        std::process::exit(1);
    }
}
