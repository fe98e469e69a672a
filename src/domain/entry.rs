use std::{fmt::Debug, hash::Hash};

/// A row in an ordered list snapshot.
///
/// `stable_id` names "the same logical row" across snapshots and must be
/// unique within one snapshot. `PartialEq` on the entry itself is the content
/// comparison: two entries with equal ids but unequal values are an update.
pub trait ListEntry: PartialEq {
    type StableId: Eq + Hash + Clone + Debug;

    fn stable_id(&self) -> Self::StableId;
}

/// Per-variant rendering capability.
///
/// Entries stay plain data; the presentation context (labels, theme, account)
/// is passed in explicitly at materialization time.
pub trait RenderRow<C: ?Sized> {
    type Row;

    fn render_row(&self, context: &C) -> Self::Row;
}
