//! # Line Numbers
//!
//! Items have no stored identifier. A user refers to an item by its 1-based
//! position in the todo file at the moment a command runs, which is the same
//! number `list` prints next to it. Numbers shift after every `do`/`delete`.
//!
//! Listing may reorder items for display (prioritized items first), but each
//! [`DisplayItem`] keeps the number of its line in the file, so whatever the
//! user sees can be passed straight back to `do`, `delete` or `pri`.

use crate::error::{Result, TodoError};
use crate::model::{Item, normalize_marker};
use std::fmt;
use std::str::FromStr;

/// A 1-based position in the todo file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineNumber(usize);

impl LineNumber {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(TodoError::InvalidLineNumber(
                "line numbers start at 1".to_string(),
            ));
        }
        Ok(Self(n))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Zero-based offset into a list of `count` lines, if in range.
    pub fn checked_offset(self, count: usize) -> Result<usize> {
        if self.0 > count {
            return Err(TodoError::LineOutOfRange {
                line: self.0,
                count,
            });
        }
        Ok(self.0 - 1)
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LineNumber {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let n: usize = s
            .trim()
            .parse()
            .map_err(|_| TodoError::InvalidLineNumber(s.to_string()))?;
        Self::new(n)
    }
}

/// Argument to `pri`: a line number immediately followed by one marker, e.g. `2B`.
///
/// The last character is the marker and everything before it is the line
/// number, so `23` sets marker `3` on line 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityArg {
    pub line: LineNumber,
    pub marker: char,
}

impl FromStr for PriorityArg {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || TodoError::InvalidPriority(s.to_string());

        let trimmed = s.trim();
        let (split, last) = trimmed.char_indices().last().ok_or_else(invalid)?;
        let digits = &trimmed[..split];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let marker = normalize_marker(last).ok_or_else(invalid)?;
        let line = digits
            .parse::<usize>()
            .map_err(|_| invalid())
            .and_then(|n| LineNumber::new(n).map_err(|_| invalid()))?;

        Ok(Self { line, marker })
    }
}

/// An item paired with its line number in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub line: usize,
    pub item: Item,
}

/// Parse raw lines into display items numbered by file position.
pub fn index_items(lines: &[String]) -> Vec<DisplayItem> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| DisplayItem {
            line: i + 1,
            item: Item::parse(line),
        })
        .collect()
}

/// Reorder for display: prioritized items first, ascending by marker, then
/// unprioritized items. Both groups keep file order among equals.
pub fn priority_order(items: Vec<DisplayItem>) -> Vec<DisplayItem> {
    let (mut prioritized, plain): (Vec<_>, Vec<_>) =
        items.into_iter().partition(|dp| dp.item.is_prioritized());
    prioritized.sort_by_key(|dp| dp.item.priority);
    prioritized.extend(plain);
    prioritized
}
