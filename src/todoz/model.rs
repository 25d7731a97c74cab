use chrono::NaiveDate;
use std::fmt;

/// Date format used for done records, e.g. `16-10-2026`.
pub const DONE_DATE_FORMAT: &str = "%d-%m-%Y";

/// A pending todo item as parsed from one line of the todo file.
///
/// Lines are stored verbatim by the store; `Item` is only a view used for
/// grouping, filtering and re-prioritizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub priority: Option<char>,
    pub text: String,
}

impl Item {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            priority: None,
            text: text.into(),
        }
    }

    /// Parse a raw line. A leading `(X)` with a single marker character is
    /// taken as the priority; anything else is plain text.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let mut chars = line.chars();
        if let (Some('('), Some(marker), Some(')')) = (chars.next(), chars.next(), chars.next())
            && is_marker_char(marker)
        {
            return Self {
                priority: Some(marker),
                text: chars.as_str().trim_start().to_string(),
            };
        }
        Self::new(line)
    }

    pub fn with_priority(mut self, marker: char) -> Self {
        self.priority = Some(marker);
        self
    }

    pub fn is_prioritized(&self) -> bool {
        self.priority.is_some()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.priority {
            Some(marker) => write!(f, "({}) {}", marker, self.text.trim()),
            None => write!(f, "{}", self.text.trim()),
        }
    }
}

fn is_marker_char(c: char) -> bool {
    !c.is_whitespace() && c != '(' && c != ')'
}

/// Validate a user supplied priority marker. Letters are upper-cased.
pub fn normalize_marker(c: char) -> Option<char> {
    if c.is_ascii_alphanumeric() {
        Some(c.to_ascii_uppercase())
    } else {
        None
    }
}

/// Collapse line breaks and runs of whitespace into single spaces.
pub fn normalize_text(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A completed item, as appended to the done file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoneRecord {
    pub text: String,
    pub completed_on: NaiveDate,
}

impl DoneRecord {
    pub fn new(text: impl Into<String>, completed_on: NaiveDate) -> Self {
        Self {
            text: text.into(),
            completed_on,
        }
    }

    /// Parse a line written by [`DoneRecord`]'s `Display` impl.
    pub fn parse(line: &str) -> Option<Self> {
        let inner = line.trim().strip_suffix(')')?;
        let (text, date) = inner.rsplit_once(" (")?;
        let completed_on = NaiveDate::parse_from_str(date, DONE_DATE_FORMAT).ok()?;
        Some(Self::new(text.trim(), completed_on))
    }
}

impl fmt::Display for DoneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.text,
            self.completed_on.format(DONE_DATE_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_priority_marker() {
        let item = Item::parse("(A) Buy milk\n");
        assert_eq!(item.priority, Some('A'));
        assert_eq!(item.text, "Buy milk");
        assert_eq!(item.to_string(), "(A) Buy milk");
    }

    #[test]
    fn plain_line_has_no_priority() {
        let item = Item::parse("Buy milk");
        assert_eq!(item.priority, None);
        assert_eq!(item.to_string(), "Buy milk");
    }

    #[test]
    fn multi_char_parens_are_not_a_marker() {
        let item = Item::parse("(AB) not a priority");
        assert_eq!(item.priority, None);
        assert_eq!(item.text, "(AB) not a priority");
    }

    #[test]
    fn marker_without_space_is_parsed() {
        let item = Item::parse("(C)tight");
        assert_eq!(item.priority, Some('C'));
        assert_eq!(item.to_string(), "(C) tight");
    }

    #[test]
    fn normalizes_markers() {
        assert_eq!(normalize_marker('b'), Some('B'));
        assert_eq!(normalize_marker('3'), Some('3'));
        assert_eq!(normalize_marker('*'), None);
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_text("New\nitem"), "New item");
        assert_eq!(normalize_text("  a \t b\r\n c  "), "a b c");
        assert_eq!(normalize_text(" \n "), "");
    }

    #[test]
    fn done_record_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let record = DoneRecord::new("Two", date);
        assert_eq!(record.to_string(), "Two (07-03-2024)");
        assert_eq!(DoneRecord::parse("Two (07-03-2024)"), Some(record));
    }

    #[test]
    fn done_record_parse_rejects_garbage() {
        assert_eq!(DoneRecord::parse("just text"), None);
        assert_eq!(DoneRecord::parse("text (not-a-date)"), None);
    }
}
