//! Entries of the recent actions (admin event log) screen.
//!
//! Every event renders as a content row; some events also get a header row
//! explaining what happened above the quoted content.

use std::cmp::Reverse;

use super::entry::ListEntry;

pub type AdminLogEventId = i64;

/// Which row of an event an entry is. Headers sort before content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentIndex {
    Header,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecentActionsEntryId {
    pub event_id: AdminLogEventId,
    pub content_index: ContentIndex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedMessage {
    pub author: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminLogAction {
    ChangeTitle { previous: String, new: String },
    ChangeAbout { previous: String, new: String },
    ChangeUsername { previous: String, new: String },
    ChangePhoto,
    ToggleInvites(bool),
    ToggleSignatures(bool),
    UpdatePinned(Option<LoggedMessage>),
    EditMessage { previous: LoggedMessage, new: LoggedMessage },
    DeleteMessage(LoggedMessage),
    ParticipantJoin,
    ParticipantLeave,
    ParticipantInvite { peer: String },
    ParticipantToggleBan { peer: String, banned: bool },
    ParticipantToggleAdmin { peer: String, promoted: bool },
    ChangeStickerPack,
    TogglePreHistoryHidden(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLogEvent {
    pub id: AdminLogEventId,
    /// Unix seconds.
    pub date: i32,
    pub author: String,
    pub action: AdminLogAction,
}

impl AdminLogEvent {
    /// Events quoting text or a message get a separate header row.
    pub fn needs_header(&self) -> bool {
        match &self.action {
            AdminLogAction::ChangeAbout { .. }
            | AdminLogAction::ChangeUsername { .. }
            | AdminLogAction::EditMessage { .. }
            | AdminLogAction::DeleteMessage(_) => true,
            AdminLogAction::UpdatePinned(message) => message.is_some(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentActionsEntry {
    pub id: RecentActionsEntryId,
    pub event: AdminLogEvent,
}

impl ListEntry for RecentActionsEntry {
    type StableId = RecentActionsEntryId;

    fn stable_id(&self) -> RecentActionsEntryId {
        self.id
    }
}

/// Builds the log snapshot in descending id order: newest event first,
/// content row above its header. Dates are not consulted.
pub fn recent_actions_entries(events: &[AdminLogEvent]) -> Vec<RecentActionsEntry> {
    let mut ordered: Vec<&AdminLogEvent> = events.iter().collect();
    ordered.sort_by_key(|event| Reverse(event.id));

    let mut entries = Vec::with_capacity(ordered.len() * 2);
    for event in ordered {
        entries.push(RecentActionsEntry {
            id: RecentActionsEntryId {
                event_id: event.id,
                content_index: ContentIndex::Content,
            },
            event: event.clone(),
        });
        if event.needs_header() {
            entries.push(RecentActionsEntry {
                id: RecentActionsEntryId {
                    event_id: event.id,
                    content_index: ContentIndex::Header,
                },
                event: event.clone(),
            });
        }
    }

    entries
}
