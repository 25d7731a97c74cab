use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::LineNumber;
use crate::model::{DoneRecord, Item};
use crate::store::DataStore;
use chrono::NaiveDate;

use super::helpers::take_line;

/// Move item `line` from the todo file to the done file, stamped with `today`.
///
/// The done record is appended before the todo file is rewritten, so a failed
/// rewrite leaves the item in both files rather than in neither. An
/// out-of-range number touches neither file.
pub fn run<S: DataStore>(store: &mut S, line: LineNumber, today: NaiveDate) -> Result<CmdResult> {
    let mut lines = store.read_pending()?;
    let taken = take_line(&mut lines, line)?;
    let text = taken.trim().to_string();

    store.append_done(&DoneRecord::new(text.clone(), today))?;
    store.write_pending(&lines)?;
    tracing::info!(line = line.get(), item = %text, "completed item");

    let mut result = CmdResult::default().with_affected_items(vec![Item::parse(&taken)]);
    result.add_message(CmdMessage::success(format!("Done: {}", text)));
    Ok(result)
}
