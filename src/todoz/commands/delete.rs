use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::LineNumber;
use crate::model::Item;
use crate::store::DataStore;

use super::helpers::take_line;

pub fn run<S: DataStore>(store: &mut S, line: LineNumber) -> Result<CmdResult> {
    let mut lines = store.read_pending()?;
    let taken = take_line(&mut lines, line)?;
    store.write_pending(&lines)?;

    let text = taken.trim();
    tracing::info!(line = line.get(), item = %text, "deleted item");

    let mut result = CmdResult::default().with_affected_items(vec![Item::parse(&taken)]);
    result.add_message(CmdMessage::success(format!("Deleted: {}", text)));
    Ok(result)
}
