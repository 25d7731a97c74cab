use crate::index::DisplayItem;
use crate::model::{DoneRecord, Item};

pub mod add;
pub mod complete;
pub mod delete;
pub mod done;
pub mod helpers;
pub mod list;
pub mod priority;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One line of the done file. `record` is `None` for lines that do not
/// follow the `text (DD-MM-YYYY)` format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoneEntry {
    pub line: usize,
    pub raw: String,
    pub record: Option<DoneRecord>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<DisplayItem>,
    pub done_entries: Vec<DoneEntry>,
    /// Number of lines in the file the command listed, before filtering
    pub total: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_items(mut self, items: Vec<Item>) -> Self {
        self.affected_items = items;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>, total: usize) -> Self {
        self.listed_items = items;
        self.total = total;
        self
    }

    pub fn with_done_entries(mut self, entries: Vec<DoneEntry>) -> Self {
        self.total = entries.len();
        self.done_entries = entries;
        self
    }
}
