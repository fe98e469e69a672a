//! Caller-side update loop for one list.
//!
//! On every state change the screen rebuilds its snapshot and hands it to
//! [`ListUpdates::update`], which reconciles it against the previous snapshot
//! and queues the transition. The view drains the queue when it is ready to
//! animate, so reconciliations for one list never overlap.

use std::collections::VecDeque;

use crate::domain::{
    entry::{ListEntry, RenderRow},
    reconcile::reconcile,
    transition::ListTransition,
};

use super::contracts::ListView;

#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTransition<E> {
    pub transition: ListTransition<E>,
    /// Set for the transition from "no list yet" to the first snapshot.
    pub first_time: bool,
    /// Whether the resulting list has no rows.
    pub is_empty: bool,
}

#[derive(Debug, Clone)]
pub struct ListUpdates<E> {
    current: Option<Vec<E>>,
    pending: VecDeque<PreparedTransition<E>>,
}

impl<E> Default for ListUpdates<E> {
    fn default() -> Self {
        Self {
            current: None,
            pending: VecDeque::new(),
        }
    }
}

impl<E> ListUpdates<E>
where
    E: ListEntry + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest snapshot handed to [`Self::update`].
    pub fn current(&self) -> &[E] {
        self.current.as_deref().unwrap_or(&[])
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn update(&mut self, entries: Vec<E>) {
        let first_time = self.current.is_none();
        let transition = reconcile(self.current(), &entries);

        tracing::debug!(
            first_time,
            operations = transition.len(),
            rows = entries.len(),
            "list transition enqueued"
        );

        self.pending.push_back(PreparedTransition {
            transition,
            first_time,
            is_empty: entries.is_empty(),
        });
        self.current = Some(entries);
    }

    pub fn dequeue(&mut self) -> Option<PreparedTransition<E>> {
        self.pending.pop_front()
    }

    /// Materializes and applies every queued transition, oldest first.
    pub fn flush<C, V>(&mut self, view: &mut V, context: &C) -> usize
    where
        C: ?Sized,
        E: RenderRow<C, Row = V::Row>,
        V: ListView,
    {
        let mut applied = 0;
        while let Some(prepared) = self.dequeue() {
            view.apply_transition(prepared.transition.materialize(context), prepared.first_time);
            applied += 1;
        }
        applied
    }
}
