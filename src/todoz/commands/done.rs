use crate::commands::{CmdResult, DoneEntry};
use crate::error::Result;
use crate::model::DoneRecord;
use crate::store::DataStore;

/// List completed records. Blank lines, left behind by older done-file
/// formats, are skipped.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let entries: Vec<DoneEntry> = store
        .read_done()?
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| DoneEntry {
            line: i + 1,
            raw: line.to_string(),
            record: DoneRecord::parse(line),
        })
        .collect();

    Ok(CmdResult::default().with_done_entries(entries))
}
