use crate::domain::transition::ListTransition;

/// A list view that accepts batched transitions of concrete rows.
pub trait ListView {
    type Row;

    fn apply_transition(&mut self, transition: ListTransition<Self::Row>, first_time: bool);
}
