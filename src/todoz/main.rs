//! # Todoz CLI
//!
//! The binary is intentionally thin: all behavior lives in `cli/`, which
//! parses arguments, wires a [`todoz::api::TodoApi`] over the configured
//! files, and renders results. This file only runs it and maps failures to
//! an exit status.
//!
//! Exit statuses:
//! - `0`: success, including a line number that is out of range (reported
//!   on stdout, nothing changed)
//! - `1`: any other error, printed as `Error: ...` on stderr
//! - `2`: unknown command or malformed arguments, including a bad line
//!   number or `pri` token (reported by clap)

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
