use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::PriorityArg;
use crate::model::Item;
use crate::store::DataStore;

/// Set or replace the priority marker of one item. Every other line is
/// written back unchanged.
pub fn run<S: DataStore>(store: &mut S, arg: PriorityArg) -> Result<CmdResult> {
    let mut lines = store.read_pending()?;
    let offset = arg.line.checked_offset(lines.len())?;

    let updated = Item::parse(&lines[offset]).with_priority(arg.marker);
    let rendered = updated.to_string();
    lines[offset] = rendered.clone();
    store.write_pending(&lines)?;
    tracing::info!(line = arg.line.get(), marker = %arg.marker, "set priority");

    let mut result = CmdResult::default().with_affected_items(vec![updated]);
    result.add_message(CmdMessage::success(rendered));
    Ok(result)
}
