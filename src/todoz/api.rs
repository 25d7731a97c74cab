//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for all todo operations, whatever UI drives them.
//!
//! The facade:
//! - **Takes validated input**: [`LineNumber`] and [`PriorityArg`] are parsed
//!   via `FromStr` at the UI edge, so malformed input never reaches a file
//! - **Dispatches** to the matching command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and never decides how results look.
//!
//! `TodoApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`

use crate::commands;
use crate::config::TodoConfig;
use crate::error::Result;
use crate::index::{LineNumber, PriorityArg};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

/// The main API facade for todo operations.
pub struct TodoApi<S: DataStore> {
    store: S,
    config: TodoConfig,
}

impl<S: DataStore> TodoApi<S> {
    pub fn new(store: S, config: TodoConfig) -> Self {
        Self { store, config }
    }

    pub fn list(&self, filter: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn add(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn complete(&mut self, line: LineNumber) -> Result<commands::CmdResult> {
        self.complete_on(line, Local::now().date_naive())
    }

    /// Like [`TodoApi::complete`] with an explicit completion date.
    pub fn complete_on(
        &mut self,
        line: LineNumber,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        commands::complete::run(&mut self.store, line, today)
    }

    pub fn delete(&mut self, line: LineNumber) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, line)
    }

    pub fn prioritize(&mut self, arg: PriorityArg) -> Result<commands::CmdResult> {
        commands::priority::run(&mut self.store, arg)
    }

    pub fn done(&self) -> Result<commands::CmdResult> {
        commands::done::run(&self.store)
    }

    pub fn config(&self) -> &TodoConfig {
        &self.config
    }
}

pub use commands::{CmdMessage, CmdResult, DoneEntry, MessageLevel};
