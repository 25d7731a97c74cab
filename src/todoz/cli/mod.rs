//! # CLI Layer
//!
//! One possible UI client for todoz, and the only place that knows about
//! stdout, stderr and exit codes.
//!
//! - `setup`: Argument parsing via clap. The closed [`setup::Commands`] enum
//!   replaces any lookup of actions by name; clap rejects unknown actions
//!   with a usage message and exit status 2.
//! - `commands`: Context setup (config layering, logging) and per-command
//!   handlers that call the API and print results.
//! - `render`: Turns `CmdResult` data into terminal text.

mod commands;
mod render;
pub mod setup;

pub use commands::run;
