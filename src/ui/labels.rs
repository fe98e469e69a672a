use crate::domain::admin_rights::{AdminRight, ChannelKind};

/// User-facing strings for list rows.
///
/// Passed explicitly into row materialization; entries never hold them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLabels {
    pub permissions_header: String,
    pub add_admins_on: String,
    pub add_admins_off: String,
    pub revoke_access: String,
    pub deleted_message: String,
    pub edited_message: String,
    pub pinned_message: String,
    pub change_channel_info: String,
    pub change_group_info: String,
    pub post_messages: String,
    pub edit_messages: String,
    pub delete_messages: String,
    pub ban_users: String,
    pub invite_users: String,
    pub pin_messages: String,
    pub add_admins: String,
}

impl Default for ListLabels {
    fn default() -> Self {
        Self {
            permissions_header: "What can this admin do?".to_owned(),
            add_admins_on: "This admin will be able to add new admins with equal or fewer rights."
                .to_owned(),
            add_admins_off: "This admin will not be able to add new admins.".to_owned(),
            revoke_access: "Dismiss Admin".to_owned(),
            deleted_message: "deleted message".to_owned(),
            edited_message: "edited message".to_owned(),
            pinned_message: "pinned message".to_owned(),
            change_channel_info: "Change Channel Info".to_owned(),
            change_group_info: "Change Group Info".to_owned(),
            post_messages: "Post Messages".to_owned(),
            edit_messages: "Edit Messages of Others".to_owned(),
            delete_messages: "Delete Messages of Others".to_owned(),
            ban_users: "Ban Users".to_owned(),
            invite_users: "Add Users".to_owned(),
            pin_messages: "Pin Messages".to_owned(),
            add_admins: "Add New Admins".to_owned(),
        }
    }
}

impl ListLabels {
    pub fn right_title(&self, right: AdminRight, kind: ChannelKind) -> &str {
        match right {
            AdminRight::ChangeInfo => match kind {
                ChannelKind::Broadcast => &self.change_channel_info,
                ChannelKind::Group => &self.change_group_info,
            },
            AdminRight::PostMessages => &self.post_messages,
            AdminRight::EditMessages => &self.edit_messages,
            AdminRight::DeleteMessages => &self.delete_messages,
            AdminRight::BanUsers => &self.ban_users,
            AdminRight::InviteUsers => &self.invite_users,
            AdminRight::PinMessages => &self.pin_messages,
            AdminRight::AddAdmins => &self.add_admins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_titles_come_from_the_labels() {
        let labels = ListLabels {
            ban_users: "Bannir".to_owned(),
            change_group_info: "Infos du groupe".to_owned(),
            ..ListLabels::default()
        };

        assert_eq!(labels.right_title(AdminRight::BanUsers, ChannelKind::Group), "Bannir");
        assert_eq!(
            labels.right_title(AdminRight::ChangeInfo, ChannelKind::Group),
            "Infos du groupe"
        );
        assert_eq!(
            labels.right_title(AdminRight::ChangeInfo, ChannelKind::Broadcast),
            "Change Channel Info"
        );
    }
}
