//! # Storage Layer
//!
//! The [`DataStore`] trait hides where pending lines and done records live.
//! Commands only ever see whole lists of lines: every operation reads a file
//! fully, transforms it in memory and hands the complete result back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage backed by two flat text files
//!   - `todo.txt`: one pending item per line
//!   - `done.txt`: one completed record per line, append-only
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! A missing file reads as an empty list.

use crate::error::Result;
use crate::model::DoneRecord;

pub mod fs;
pub mod memory;

/// Abstract interface for the pending and done collections.
pub trait DataStore {
    /// Read every pending line, in file order, without line terminators
    fn read_pending(&self) -> Result<Vec<String>>;

    /// Replace the pending file with exactly `lines`
    fn write_pending(&mut self, lines: &[String]) -> Result<()>;

    /// Append one line to the pending file
    fn append_pending(&mut self, line: &str) -> Result<()>;

    /// Read every line of the done file, in file order
    fn read_done(&self) -> Result<Vec<String>>;

    /// Append one completed record to the done file
    fn append_done(&mut self, record: &DoneRecord) -> Result<()>;
}
