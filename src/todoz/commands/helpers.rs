use crate::error::{Result, TodoError};
use crate::index::LineNumber;
use regex::{Regex, RegexBuilder};

/// Remove the line at `line` from `lines`, returning it.
///
/// Fails with [`TodoError::LineOutOfRange`] and leaves `lines` untouched when
/// the number does not name an existing line.
pub fn take_line(lines: &mut Vec<String>, line: LineNumber) -> Result<String> {
    let offset = line.checked_offset(lines.len())?;
    Ok(lines.remove(offset))
}

/// Build a case-insensitive matcher for a list filter. Input that is not a
/// valid pattern is matched literally.
pub fn build_matcher(term: &str) -> Result<Regex> {
    RegexBuilder::new(term)
        .case_insensitive(true)
        .build()
        .or_else(|_| {
            RegexBuilder::new(&regex::escape(term))
                .case_insensitive(true)
                .build()
        })
        .map_err(|e| TodoError::Api(format!("Invalid filter '{}': {}", term, e)))
}
