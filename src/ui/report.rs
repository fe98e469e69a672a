//! Plain-text report of a snapshot diff.
//!
//! One line per operation in application order, then a summary:
//! - `- 3` deletes old row 3
//! - `+ 1 row` inserts a new row at 1
//! - `~ 4 -> 0 row` moves old row 4 to 0
//! - `* 2 -> 1 row` updates old row 2, now at 1

use crate::{domain::transition::ListOperation, usecases::diff_snapshots::DiffOutput};

use super::rows::ListRow;

pub fn render_diff_report(output: DiffOutput) -> Vec<String> {
    let DiffOutput {
        old_len,
        new_len,
        transition,
        verified,
    } = output;

    let summary = format!(
        "{old_len} -> {new_len} rows: {} deleted, {} inserted ({} moved), {} updated{}",
        transition.deletions.len(),
        transition.insertions.len(),
        transition.moves(),
        transition.updates.len(),
        if verified { ", replay verified" } else { "" }
    );

    let mut lines: Vec<String> = transition
        .materialize(&())
        .into_operations()
        .into_iter()
        .map(operation_line)
        .collect();
    lines.push(summary);
    lines
}

fn operation_line(operation: ListOperation<ListRow>) -> String {
    match operation {
        ListOperation::Delete { index } => format!("- {index}"),
        ListOperation::Insert {
            index,
            entry,
            previous_index: None,
        } => format!("+ {index} {}", entry.display_line()),
        ListOperation::Insert {
            index,
            entry,
            previous_index: Some(previous),
        } => format!("~ {previous} -> {index} {}", entry.display_line()),
        ListOperation::Update {
            index,
            entry,
            previous_index,
        } => format!("* {previous_index} -> {index} {}", entry.display_line()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::transition::{Insertion, ListTransition, Update},
        infra::snapshot_file::SnapshotEntry,
    };

    fn entry(id: &str) -> SnapshotEntry {
        SnapshotEntry {
            id: id.to_owned(),
            content: None,
        }
    }

    #[test]
    fn renders_operations_in_application_order_then_summary() {
        let output = DiffOutput {
            old_len: 3,
            new_len: 3,
            transition: ListTransition {
                deletions: vec![1, 2],
                insertions: vec![
                    Insertion {
                        index: 0,
                        entry: entry("c"),
                        previous_index: Some(2),
                    },
                    Insertion {
                        index: 2,
                        entry: entry("d"),
                        previous_index: None,
                    },
                ],
                updates: vec![Update {
                    index: 1,
                    entry: entry("a"),
                    previous_index: 0,
                }],
            },
            verified: true,
        };

        let lines = render_diff_report(output);

        assert_eq!(
            lines,
            vec![
                "- 2",
                "- 1",
                "~ 2 -> 0 c",
                "* 0 -> 1 a",
                "+ 2 d",
                "3 -> 3 rows: 2 deleted, 2 inserted (1 moved), 1 updated, replay verified",
            ]
        );
    }

    #[test]
    fn empty_diff_renders_only_summary() {
        let lines = render_diff_report(DiffOutput {
            old_len: 0,
            new_len: 0,
            transition: ListTransition::default(),
            verified: false,
        });

        assert_eq!(
            lines,
            vec!["0 -> 0 rows: 0 deleted, 0 inserted (0 moved), 0 updated"]
        );
    }
}
