use crate::commands::CmdResult;
use crate::error::{Result, TodoError};
use crate::model::{Item, normalize_text};
use crate::store::DataStore;

/// Append a new item. Line breaks and whitespace runs collapse to single
/// spaces so one item always occupies exactly one line.
pub fn run<S: DataStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let text = normalize_text(text);
    if text.is_empty() {
        return Err(TodoError::EmptyItem);
    }

    store.append_pending(&text)?;
    tracing::info!(item = %text, "added item");

    Ok(CmdResult::default().with_affected_items(vec![Item::parse(&text)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_in_order() {
        let mut store = InMemoryStore::new();
        run(&mut store, "One").unwrap();
        run(&mut store, "Two").unwrap();
        assert_eq!(store.read_pending().unwrap(), vec!["One", "Two"]);
    }

    #[test]
    fn line_breaks_are_collapsed() {
        let mut store = InMemoryStore::new();
        run(&mut store, "New\nitem").unwrap();
        run(&mut store, "  spaced \t  out\r\n").unwrap();
        assert_eq!(store.read_pending().unwrap(), vec!["New item", "spaced out"]);
    }

    #[test]
    fn empty_text_is_rejected_without_writing() {
        let mut store = InMemoryStore::new();
        assert!(matches!(run(&mut store, " \n\t"), Err(TodoError::EmptyItem)));
        assert!(store.read_pending().unwrap().is_empty());
    }

    #[test]
    fn produces_no_messages() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "(A) Quiet").unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(result.affected_items[0].priority, Some('A'));
    }
}
