use std::collections::HashSet;

use super::entry::ListEntry;

/// A bot command offered by a chat member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeerCommand {
    pub peer_id: i64,
    pub command: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandEntryId {
    pub peer_id: i64,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub index: usize,
    pub command: PeerCommand,
}

impl ListEntry for CommandEntry {
    type StableId = CommandEntryId;

    fn stable_id(&self) -> CommandEntryId {
        CommandEntryId {
            peer_id: self.command.peer_id,
            command: self.command.command.clone(),
        }
    }
}

/// Builds the suggestion snapshot, keeping the first of repeated commands.
pub fn command_entries(results: &[PeerCommand]) -> Vec<CommandEntry> {
    let mut seen = HashSet::with_capacity(results.len());
    let mut entries = Vec::with_capacity(results.len());

    for command in results {
        let entry = CommandEntry {
            index: entries.len(),
            command: command.clone(),
        };
        if !seen.insert(entry.stable_id()) {
            tracing::debug!(
                peer_id = command.peer_id,
                command = %command.command,
                "skipping repeated command suggestion"
            );
            continue;
        }
        entries.push(entry);
    }

    entries
}

fn is_query_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Replaces the whole `/query` token under `cursor` with `command `.
///
/// Returns the new text and cursor, or `None` when the cursor is not inside a
/// command query. `cursor` is a byte offset.
pub fn complete_command(input: &str, cursor: usize, command: &str) -> Option<(String, usize)> {
    let before = input.get(..cursor)?;
    let slash = before.rfind('/')?;

    if !before[slash + 1..].chars().all(is_query_char) {
        return None;
    }
    let starts_token = before[..slash]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace);
    if !starts_token {
        return None;
    }

    let after = &input[cursor..];
    let token_end = after
        .find(|ch: char| !is_query_char(ch))
        .map_or(input.len(), |offset| cursor + offset);

    let replacement = format!("{command} ");
    let mut text = String::with_capacity(input.len() + replacement.len());
    text.push_str(&input[..slash + 1]);
    text.push_str(&replacement);
    text.push_str(&input[token_end..]);

    Some((text, slash + 1 + replacement.len()))
}
