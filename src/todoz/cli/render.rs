use colored::Colorize;
use todoz::api::{CmdMessage, DoneEntry, MessageLevel};
use todoz::index::DisplayItem;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Line numbers below 10 are padded so single and double digit items align.
fn line_label(n: usize) -> String {
    format!("{:>2}", n)
}

pub(super) fn render_item_list(items: &[DisplayItem], total: usize) -> String {
    let mut out = String::new();
    for dp in items {
        let label = line_label(dp.line);
        let label = if dp.item.is_prioritized() {
            label.yellow()
        } else {
            label.normal()
        };
        out.push_str(&format!("{} {}\n", label, dp.item));
    }
    out.push_str(&format!("---\n{} item(s)\n", total));
    out
}

pub(super) fn render_done_list(entries: &[DoneEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let text = match &entry.record {
            Some(record) => format!(
                "{} {}",
                record.text,
                format!("({})", record.completed_on.format(todoz::model::DONE_DATE_FORMAT))
                    .dimmed()
            ),
            None => entry.raw.clone(),
        };
        out.push_str(&format!("{} {}\n", line_label(entry.line), text));
    }
    out.push_str(&format!("---\n{} item(s) done\n", entries.len()));
    out
}
