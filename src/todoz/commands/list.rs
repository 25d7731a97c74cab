use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{index_items, priority_order};
use crate::store::DataStore;

use super::helpers::build_matcher;

/// List pending items.
///
/// Without a filter, prioritized items are shown first. With a filter, only
/// matching items are shown, in file order. `total` always counts every line.
pub fn run<S: DataStore>(store: &S, filter: Option<&str>) -> Result<CmdResult> {
    let lines = store.read_pending()?;
    let total = lines.len();

    let listed = match filter.map(str::trim).filter(|f| !f.is_empty()) {
        None => priority_order(index_items(&lines)),
        Some(term) => {
            let matcher = build_matcher(term)?;
            index_items(&lines)
                .into_iter()
                .filter(|dp| matcher.is_match(&lines[dp.line - 1]))
                .collect()
        }
    };
    tracing::debug!(total, shown = listed.len(), "listed items");

    Ok(CmdResult::default().with_listed_items(listed, total))
}
