//! Row materialization for every list screen.

use crate::{
    domain::{
        admin_rights::AdminEntry,
        command_suggestions::CommandEntry,
        entry::RenderRow,
        recent_actions::{AdminLogAction, AdminLogEvent, ContentIndex, RecentActionsEntry},
    },
    infra::snapshot_file::SnapshotEntry,
};

use super::{labels::ListLabels, rows::ListRow};

impl RenderRow<ListLabels> for AdminEntry {
    type Row = ListRow;

    fn render_row(&self, labels: &ListLabels) -> ListRow {
        match self {
            Self::Info { title, status } => ListRow::PeerInfo {
                title: title.clone(),
                status: status.clone(),
            },
            Self::RightsTitle => ListRow::SectionHeader(labels.permissions_header.clone()),
            Self::Right {
                right,
                kind,
                value,
                enabled,
                ..
            } => ListRow::Switch {
                title: labels.right_title(*right, *kind).to_owned(),
                value: *value,
                enabled: *enabled,
            },
            Self::AddAdminsInfo { can_add_admins } => ListRow::Text(if *can_add_admins {
                labels.add_admins_on.clone()
            } else {
                labels.add_admins_off.clone()
            }),
            Self::Dismiss => ListRow::Action {
                title: labels.revoke_access.clone(),
                destructive: true,
            },
        }
    }
}

impl RenderRow<ListLabels> for RecentActionsEntry {
    type Row = ListRow;

    fn render_row(&self, labels: &ListLabels) -> ListRow {
        match self.id.content_index {
            ContentIndex::Header => ListRow::Message {
                author: None,
                text: header_text(&self.event, labels),
            },
            ContentIndex::Content => content_row(&self.event),
        }
    }
}

fn header_text(event: &AdminLogEvent, labels: &ListLabels) -> String {
    let author = &event.author;
    match &event.action {
        AdminLogAction::ChangeAbout { .. } => format!("{author} changed description:"),
        AdminLogAction::ChangeUsername { .. } => format!("{author} changed link:"),
        AdminLogAction::EditMessage { .. } => format!("{author} {}:", labels.edited_message),
        AdminLogAction::DeleteMessage(_) => format!("{author} {}:", labels.deleted_message),
        AdminLogAction::UpdatePinned(_) => format!("{author} {}:", labels.pinned_message),
        _ => author.clone(),
    }
}

fn content_row(event: &AdminLogEvent) -> ListRow {
    let author = &event.author;
    let service = |text: String| ListRow::Message { author: None, text };

    match &event.action {
        AdminLogAction::ChangeTitle { new, .. } => {
            service(format!("{author} changed title to \"{new}\""))
        }
        AdminLogAction::ChangeAbout { new, .. } => service(new.clone()),
        AdminLogAction::ChangeUsername { new, .. } => {
            if new.is_empty() {
                service(String::new())
            } else {
                service(format!("https://t.me/{new}"))
            }
        }
        AdminLogAction::ChangePhoto => service(format!("{author} changed photo")),
        AdminLogAction::ToggleInvites(enabled) => service(format!(
            "{author} {} invites",
            if *enabled { "enabled" } else { "disabled" }
        )),
        AdminLogAction::ToggleSignatures(enabled) => service(format!(
            "{author} {} signatures",
            if *enabled { "enabled" } else { "disabled" }
        )),
        AdminLogAction::UpdatePinned(Some(message))
        | AdminLogAction::EditMessage { new: message, .. }
        | AdminLogAction::DeleteMessage(message) => ListRow::Message {
            author: message.author.clone(),
            text: message.text.clone(),
        },
        AdminLogAction::UpdatePinned(None) => service(format!("{author} unpinned message")),
        AdminLogAction::ParticipantJoin => service(format!("{author} joined")),
        AdminLogAction::ParticipantLeave => service(format!("{author} left")),
        AdminLogAction::ParticipantInvite { peer } => service(format!("{author} invited {peer}")),
        AdminLogAction::ParticipantToggleBan { peer, banned } => service(format!(
            "{author} {} {peer}",
            if *banned { "banned" } else { "unbanned" }
        )),
        AdminLogAction::ParticipantToggleAdmin { peer, promoted } => service(format!(
            "{author} {} {peer}",
            if *promoted { "promoted" } else { "demoted" }
        )),
        AdminLogAction::ChangeStickerPack => service(format!("{author} changed sticker set")),
        AdminLogAction::TogglePreHistoryHidden(hidden) => service(format!(
            "{author} made chat history {} for new members",
            if *hidden { "hidden" } else { "visible" }
        )),
    }
}

impl RenderRow<ListLabels> for CommandEntry {
    type Row = ListRow;

    fn render_row(&self, _labels: &ListLabels) -> ListRow {
        ListRow::Command {
            command: self.command.command.clone(),
            description: self.command.description.clone(),
        }
    }
}

impl RenderRow<()> for SnapshotEntry {
    type Row = ListRow;

    fn render_row(&self, _context: &()) -> ListRow {
        ListRow::Plain {
            id: self.id.clone(),
            content: self.content.as_ref().map(ToString::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        admin_rights::{admin_entries, AdminEditorContext, AdminEditorState, ChannelKind},
        recent_actions::{recent_actions_entries, LoggedMessage},
        reconcile::reconcile,
    };

    #[test]
    fn admin_transition_materializes_only_changed_rows() {
        let context = AdminEditorContext {
            channel_kind: ChannelKind::Broadcast,
            account_peer_id: 1,
            account_is_creator: true,
            account_rights: None,
            admin_title: "Alice".to_owned(),
            admin_status: None,
            participant: None,
        };
        let before = admin_entries(&context, &AdminEditorState::default());
        let after = admin_entries(&context, &AdminEditorState::default().begin_update());

        let rows = reconcile(&before, &after).materialize(&ListLabels::default());

        assert!(!rows.updates.is_empty());
        assert!(rows
            .updates
            .iter()
            .all(|update| matches!(update.entry, ListRow::Switch { enabled: false, .. })));
    }

    #[test]
    fn deleted_message_renders_header_and_quoted_content() {
        let events = vec![AdminLogEvent {
            id: 9,
            date: 100,
            author: "Bob".to_owned(),
            action: AdminLogAction::DeleteMessage(LoggedMessage {
                author: Some("Eve".to_owned()),
                text: "spam".to_owned(),
            }),
        }];
        let labels = ListLabels::default();

        let rows: Vec<ListRow> = recent_actions_entries(&events)
            .iter()
            .map(|entry| entry.render_row(&labels))
            .collect();

        assert_eq!(
            rows,
            vec![
                ListRow::Message {
                    author: Some("Eve".to_owned()),
                    text: "spam".to_owned(),
                },
                ListRow::Message {
                    author: None,
                    text: "Bob deleted message:".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn snapshot_entry_renders_toml_content() {
        let entry = SnapshotEntry {
            id: "a".to_owned(),
            content: Some(toml::Value::Integer(3)),
        };

        assert_eq!(
            entry.render_row(&()),
            ListRow::Plain {
                id: "a".to_owned(),
                content: Some("3".to_owned()),
            }
        );
    }
}
