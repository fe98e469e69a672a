//! Entries of the admin rights editor.
//!
//! The editor lists the admin's profile, one switch per right the current
//! account may grant, a hint about adding admins and a dismiss action.

use super::entry::ListEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminRight {
    ChangeInfo,
    PostMessages,
    EditMessages,
    DeleteMessages,
    BanUsers,
    InviteUsers,
    PinMessages,
    AddAdmins,
}

impl AdminRight {
    fn bit(self) -> u32 {
        match self {
            Self::ChangeInfo => 1 << 0,
            Self::PostMessages => 1 << 1,
            Self::EditMessages => 1 << 2,
            Self::DeleteMessages => 1 << 3,
            Self::BanUsers => 1 << 4,
            Self::InviteUsers => 1 << 5,
            Self::PinMessages => 1 << 7,
            Self::AddAdmins => 1 << 9,
        }
    }
}

/// Set of admin rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AdminRights(u32);

impl AdminRights {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn of(rights: &[AdminRight]) -> Self {
        rights
            .iter()
            .fold(Self::empty(), |acc, right| acc.with(*right))
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, right: AdminRight) -> bool {
        self.0 & right.bit() != 0
    }

    pub fn with(self, right: AdminRight) -> Self {
        Self(self.0 | right.bit())
    }

    pub fn without(self, right: AdminRight) -> Self {
        Self(self.0 & !right.bit())
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn toggled(self, right: AdminRight) -> Self {
        if self.contains(right) {
            self.without(right)
        } else {
            self.with(right)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelKind {
    #[default]
    Broadcast,
    Group,
}

impl ChannelKind {
    /// Rights shown in the editor, in display order.
    pub fn rights_order(self) -> &'static [AdminRight] {
        match self {
            Self::Broadcast => &[
                AdminRight::ChangeInfo,
                AdminRight::PostMessages,
                AdminRight::EditMessages,
                AdminRight::DeleteMessages,
                AdminRight::InviteUsers,
                AdminRight::AddAdmins,
            ],
            Self::Group => &[
                AdminRight::ChangeInfo,
                AdminRight::DeleteMessages,
                AdminRight::BanUsers,
                AdminRight::PinMessages,
                AdminRight::AddAdmins,
            ],
        }
    }

    pub fn rights_mask(self) -> AdminRights {
        AdminRights::of(self.rights_order())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantAdmin {
    pub rights: AdminRights,
    pub promoted_by: i64,
    pub can_be_edited: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Participant {
    Creator,
    Member { admin: Option<ParticipantAdmin> },
}

impl Participant {
    fn admin(&self) -> Option<&ParticipantAdmin> {
        match self {
            Self::Creator => None,
            Self::Member { admin } => admin.as_ref(),
        }
    }
}

/// Everything the editor knows about the channel, the account and the admin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminEditorContext {
    pub channel_kind: ChannelKind,
    pub account_peer_id: i64,
    pub account_is_creator: bool,
    pub account_rights: Option<AdminRights>,
    pub admin_title: String,
    pub admin_status: Option<String>,
    pub participant: Option<Participant>,
}

/// Local edits on top of the participant's stored rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdminEditorState {
    pub pending_rights: Option<AdminRights>,
    pub updating: bool,
}

impl AdminEditorState {
    /// Flips `right` in the rights currently displayed.
    pub fn toggle(self, displayed: AdminRights, right: AdminRight) -> Self {
        Self {
            pending_rights: Some(displayed.toggled(right)),
            ..self
        }
    }

    pub fn begin_update(self) -> Self {
        Self {
            updating: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminEntryId {
    Info,
    RightsTitle,
    Right(AdminRight),
    AddAdminsInfo,
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEntry {
    Info {
        title: String,
        status: Option<String>,
    },
    RightsTitle,
    Right {
        index: usize,
        right: AdminRight,
        kind: ChannelKind,
        displayed: AdminRights,
        value: bool,
        enabled: bool,
    },
    AddAdminsInfo {
        can_add_admins: bool,
    },
    Dismiss,
}

impl ListEntry for AdminEntry {
    type StableId = AdminEntryId;

    fn stable_id(&self) -> AdminEntryId {
        match self {
            Self::Info { .. } => AdminEntryId::Info,
            Self::RightsTitle => AdminEntryId::RightsTitle,
            Self::Right { right, .. } => AdminEntryId::Right(*right),
            Self::AddAdminsInfo { .. } => AdminEntryId::AddAdminsInfo,
            Self::Dismiss => AdminEntryId::Dismiss,
        }
    }
}

pub fn can_edit_admin_rights(context: &AdminEditorContext) -> bool {
    if context.account_is_creator {
        return true;
    }

    let can_add_admins = context
        .account_rights
        .is_some_and(|rights| rights.contains(AdminRight::AddAdmins));

    match &context.participant {
        Some(Participant::Creator) => false,
        Some(Participant::Member { admin: Some(admin) }) => {
            admin.can_be_edited || admin.promoted_by == context.account_peer_id
        }
        Some(Participant::Member { admin: None }) | None => can_add_admins,
    }
}

/// Rights of the channel kind that the current account may hand out.
pub fn grantable_rights(context: &AdminEditorContext) -> AdminRights {
    let mask = context.channel_kind.rights_mask();
    if context.account_is_creator {
        return mask;
    }

    context
        .account_rights
        .map(|rights| mask.intersection(rights))
        .unwrap_or_default()
}

/// Rights to submit when the editor is confirmed, or `None` when nothing
/// changed.
///
/// Local edits win. A participant who is not an admin yet gets every
/// grantable right except adding admins. Dismissing an admin submits
/// `AdminRights::empty()` instead.
pub fn rights_to_commit(
    context: &AdminEditorContext,
    state: &AdminEditorState,
) -> Option<AdminRights> {
    if let Some(pending) = state.pending_rights {
        return Some(pending);
    }

    let is_new_admin = match &context.participant {
        Some(Participant::Creator) => false,
        Some(Participant::Member { admin }) => admin.is_none(),
        None => can_edit_admin_rights(context),
    };

    is_new_admin.then(|| grantable_rights(context).without(AdminRight::AddAdmins))
}

/// Builds the editor snapshot for the given context and local state.
pub fn admin_entries(context: &AdminEditorContext, state: &AdminEditorState) -> Vec<AdminEntry> {
    let mut entries = vec![
        AdminEntry::Info {
            title: context.admin_title.clone(),
            status: context.admin_status.clone(),
        },
        AdminEntry::RightsTitle,
    ];

    let kind = context.channel_kind;
    let participant_admin = context.participant.as_ref().and_then(Participant::admin);

    if can_edit_admin_rights(context) {
        let grantable = grantable_rights(context);

        let displayed = state
            .pending_rights
            .or_else(|| participant_admin.map(|admin| admin.rights))
            .unwrap_or_else(|| grantable.without(AdminRight::AddAdmins));

        let granted = kind
            .rights_order()
            .iter()
            .copied()
            .filter(|right| grantable.contains(*right));
        for (index, right) in granted.enumerate() {
            entries.push(AdminEntry::Right {
                index,
                right,
                kind,
                displayed,
                value: displayed.contains(right),
                enabled: !state.updating,
            });
        }

        if grantable.contains(AdminRight::AddAdmins) {
            entries.push(AdminEntry::AddAdminsInfo {
                can_add_admins: displayed.contains(AdminRight::AddAdmins),
            });
        }

        let can_dismiss = participant_admin.is_some_and(|admin| {
            !admin.rights.is_empty()
                && (context.account_is_creator
                    || admin.promoted_by == context.account_peer_id
                    || admin.can_be_edited)
        });
        if can_dismiss {
            entries.push(AdminEntry::Dismiss);
        }
    } else if let Some(admin) = participant_admin {
        for (index, right) in kind.rights_order().iter().copied().enumerate() {
            entries.push(AdminEntry::Right {
                index,
                right,
                kind,
                displayed: admin.rights,
                value: admin.rights.contains(right),
                enabled: false,
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reconcile::reconcile;

    const ACCOUNT: i64 = 100;

    fn creator_context(participant: Option<Participant>) -> AdminEditorContext {
        AdminEditorContext {
            channel_kind: ChannelKind::Group,
            account_peer_id: ACCOUNT,
            account_is_creator: true,
            account_rights: None,
            admin_title: "Alice".to_owned(),
            admin_status: Some("online".to_owned()),
            participant,
        }
    }

    fn ids(entries: &[AdminEntry]) -> Vec<AdminEntryId> {
        entries.iter().map(ListEntry::stable_id).collect()
    }

    fn admin(rights: &[AdminRight], promoted_by: i64) -> Participant {
        Participant::Member {
            admin: Some(ParticipantAdmin {
                rights: AdminRights::of(rights),
                promoted_by,
                can_be_edited: false,
            }),
        }
    }

    #[test]
    fn creator_sees_every_group_right_and_dismiss() {
        let context = creator_context(Some(admin(&[AdminRight::PinMessages], 7)));

        let entries = admin_entries(&context, &AdminEditorState::default());

        assert_eq!(
            ids(&entries),
            vec![
                AdminEntryId::Info,
                AdminEntryId::RightsTitle,
                AdminEntryId::Right(AdminRight::ChangeInfo),
                AdminEntryId::Right(AdminRight::DeleteMessages),
                AdminEntryId::Right(AdminRight::BanUsers),
                AdminEntryId::Right(AdminRight::PinMessages),
                AdminEntryId::Right(AdminRight::AddAdmins),
                AdminEntryId::AddAdminsInfo,
                AdminEntryId::Dismiss,
            ]
        );
    }

    #[test]
    fn new_admin_defaults_to_grantable_rights_without_add_admins() {
        let context = creator_context(Some(Participant::Member { admin: None }));

        let entries = admin_entries(&context, &AdminEditorState::default());

        let values: Vec<(AdminRight, bool)> = entries
            .iter()
            .filter_map(|entry| match entry {
                AdminEntry::Right { right, value, .. } => Some((*right, *value)),
                _ => None,
            })
            .collect();
        assert!(values.contains(&(AdminRight::BanUsers, true)));
        assert!(values.contains(&(AdminRight::AddAdmins, false)));
        assert!(!ids(&entries).contains(&AdminEntryId::Dismiss));
    }

    #[test]
    fn non_creator_lists_only_rights_it_holds() {
        let context = AdminEditorContext {
            account_is_creator: false,
            account_rights: Some(AdminRights::of(&[
                AdminRight::AddAdmins,
                AdminRight::BanUsers,
                AdminRight::PostMessages,
            ])),
            ..creator_context(None)
        };

        let entries = admin_entries(&context, &AdminEditorState::default());

        assert_eq!(
            ids(&entries)[2..],
            [
                AdminEntryId::Right(AdminRight::BanUsers),
                AdminEntryId::Right(AdminRight::AddAdmins),
                AdminEntryId::AddAdminsInfo,
            ]
        );
    }

    #[test]
    fn read_only_view_lists_all_rights_disabled() {
        let context = AdminEditorContext {
            account_is_creator: false,
            account_rights: Some(AdminRights::of(&[AdminRight::AddAdmins])),
            ..creator_context(Some(admin(&[AdminRight::ChangeInfo], 55)))
        };

        let entries = admin_entries(&context, &AdminEditorState::default());

        assert!(!can_edit_admin_rights(&context));
        assert_eq!(entries.len(), 2 + ChannelKind::Group.rights_order().len());
        assert!(entries
            .iter()
            .all(|entry| !matches!(entry, AdminEntry::Right { enabled: true, .. })));
    }

    #[test]
    fn toggling_a_right_updates_every_switch_but_flips_only_that_value() {
        let context = creator_context(Some(admin(&[AdminRight::PinMessages], ACCOUNT)));
        let state = AdminEditorState::default();
        let before = admin_entries(&context, &state);

        let displayed = AdminRights::of(&[AdminRight::PinMessages]);
        let toggled = state.toggle(displayed, AdminRight::BanUsers);
        let after = admin_entries(&context, &toggled);

        let transition = reconcile(&before, &after);

        assert!(transition.deletions.is_empty());
        assert!(transition.insertions.is_empty());
        let updated: Vec<AdminEntryId> = transition
            .updates
            .iter()
            .map(|update| update.entry.stable_id())
            .collect();
        let switches = ChannelKind::Group.rights_order().len();
        assert_eq!(updated.len(), switches);
        assert!(updated
            .iter()
            .all(|id| matches!(id, AdminEntryId::Right(_))));

        let value_of = |entries: &[AdminEntry], wanted: AdminRight| {
            entries.iter().find_map(|entry| match entry {
                AdminEntry::Right { right, value, .. } if *right == wanted => Some(*value),
                _ => None,
            })
        };
        for right in ChannelKind::Group.rights_order() {
            let flipped = value_of(&before, *right) != value_of(&after, *right);
            assert_eq!(flipped, *right == AdminRight::BanUsers, "{right:?}");
        }
    }

    #[test]
    fn commit_prefers_local_edits() {
        let context = creator_context(Some(admin(&[AdminRight::PinMessages], ACCOUNT)));
        let state = AdminEditorState::default()
            .toggle(AdminRights::of(&[AdminRight::PinMessages]), AdminRight::BanUsers);

        assert_eq!(
            rights_to_commit(&context, &state),
            Some(AdminRights::of(&[AdminRight::PinMessages, AdminRight::BanUsers]))
        );
    }

    #[test]
    fn commit_without_edits_is_empty_for_an_existing_admin() {
        let context = creator_context(Some(admin(&[AdminRight::PinMessages], ACCOUNT)));

        assert_eq!(rights_to_commit(&context, &AdminEditorState::default()), None);
        assert_eq!(
            rights_to_commit(
                &creator_context(Some(Participant::Creator)),
                &AdminEditorState::default()
            ),
            None
        );
    }

    #[test]
    fn commit_for_a_new_admin_grants_everything_but_adding_admins() {
        let context = AdminEditorContext {
            account_is_creator: false,
            account_rights: Some(AdminRights::of(&[
                AdminRight::AddAdmins,
                AdminRight::BanUsers,
                AdminRight::PostMessages,
            ])),
            ..creator_context(Some(Participant::Member { admin: None }))
        };

        assert_eq!(
            rights_to_commit(&context, &AdminEditorState::default()),
            Some(AdminRights::of(&[AdminRight::BanUsers]))
        );
        assert_eq!(
            rights_to_commit(
                &creator_context(Some(Participant::Member { admin: None })),
                &AdminEditorState::default()
            ),
            Some(ChannelKind::Group.rights_mask().without(AdminRight::AddAdmins))
        );
    }

    #[test]
    fn begin_update_disables_every_switch() {
        let context = creator_context(None);
        let state = AdminEditorState::default().begin_update();

        let entries = admin_entries(&context, &state);

        assert!(entries
            .iter()
            .all(|entry| !matches!(entry, AdminEntry::Right { enabled: true, .. })));
    }

    #[test]
    fn toggled_flips_membership() {
        let rights = AdminRights::empty().with(AdminRight::BanUsers);

        assert!(!rights.toggled(AdminRight::BanUsers).contains(AdminRight::BanUsers));
        assert!(rights.toggled(AdminRight::AddAdmins).contains(AdminRight::AddAdmins));
    }
}
