//! Stable-identity list reconciliation.
//!
//! Given the previous and the next snapshot of a list, computes the deletions,
//! insertions and updates a list view needs to animate from one to the other
//! instead of reloading. Rows keep their identity across snapshots through
//! [`ListEntry::stable_id`]; content changes on rows that kept their relative
//! order become updates, rows whose relative order changed become insertions
//! that carry their previous index (moves).

use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::Debug,
};

use super::{
    entry::ListEntry,
    transition::{Insertion, ListTransition, Update},
};

/// Two entries of one snapshot sharing a stable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdentity<Id> {
    pub id: Id,
    pub first: usize,
    pub second: usize,
}

/// Returns the first repeated stable id in `entries`, if any.
pub fn find_duplicate<E: ListEntry>(entries: &[E]) -> Option<DuplicateIdentity<E::StableId>> {
    let mut seen = HashMap::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match seen.entry(entry.stable_id()) {
            Entry::Occupied(slot) => {
                return Some(DuplicateIdentity {
                    id: slot.key().clone(),
                    first: *slot.get(),
                    second: index,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }

    None
}

/// Computes the operations transforming `old` into `new`.
///
/// Both snapshots must have unique stable ids. Debug builds panic on a
/// duplicate; release builds log it and fall back to last-write-wins for
/// `old` and to a plain insertion for repeats in `new`.
pub fn reconcile<E>(old: &[E], new: &[E]) -> ListTransition<E>
where
    E: ListEntry + Clone,
{
    let old_positions = index_by_identity(old);

    // New index that claimed each old position.
    let mut claimed_by: Vec<Option<usize>> = vec![None; old.len()];
    let mut matches: Vec<Option<usize>> = Vec::with_capacity(new.len());

    for (index, entry) in new.iter().enumerate() {
        let id = entry.stable_id();
        let matched = match old_positions.get(&id) {
            Some(&previous) => match claimed_by[previous] {
                None => {
                    claimed_by[previous] = Some(index);
                    Some(previous)
                }
                Some(first) => {
                    report_duplicate("new", &id, first, index);
                    None
                }
            },
            None => None,
        };
        matches.push(matched);
    }

    let matched_old: Vec<usize> = matches.iter().flatten().copied().collect();
    let mut in_order = stable_positions(&matched_old).into_iter();
    let stays: Vec<bool> = matches
        .iter()
        .map(|matched| matched.is_some() && in_order.next().unwrap_or(false))
        .collect();

    let mut retained = vec![false; old.len()];
    let mut transition = ListTransition::default();

    for (index, entry) in new.iter().enumerate() {
        match matches[index] {
            None => transition.insertions.push(Insertion {
                index,
                entry: entry.clone(),
                previous_index: None,
            }),
            Some(previous_index) if stays[index] => {
                retained[previous_index] = true;
                if old[previous_index] != *entry {
                    transition.updates.push(Update {
                        index,
                        entry: entry.clone(),
                        previous_index,
                    });
                }
            }
            Some(previous_index) => transition.insertions.push(Insertion {
                index,
                entry: entry.clone(),
                previous_index: Some(previous_index),
            }),
        }
    }

    transition.deletions = retained
        .iter()
        .enumerate()
        .filter(|(_, kept)| !**kept)
        .map(|(index, _)| index)
        .collect();

    tracing::debug!(
        old_len = old.len(),
        new_len = new.len(),
        deletions = transition.deletions.len(),
        insertions = transition.insertions.len(),
        moves = transition.moves(),
        updates = transition.updates.len(),
        "list snapshots reconciled"
    );

    transition
}

fn index_by_identity<E: ListEntry>(entries: &[E]) -> HashMap<E::StableId, usize> {
    let mut positions = HashMap::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match positions.entry(entry.stable_id()) {
            Entry::Occupied(mut slot) => {
                report_duplicate("old", slot.key(), *slot.get(), index);
                slot.insert(index);
            }
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
        }
    }

    positions
}

fn report_duplicate<Id: Debug>(snapshot: &'static str, id: &Id, first: usize, second: usize) {
    tracing::warn!(
        snapshot,
        id = ?id,
        first,
        second,
        "duplicate stable id in list snapshot"
    );

    if cfg!(debug_assertions) {
        panic!("duplicate stable id {id:?} in {snapshot} snapshot at positions {first} and {second}");
    }
}

/// Marks the members of one longest strictly increasing subsequence.
///
/// Patience sorting with predecessor links, O(n log n).
fn stable_positions(values: &[usize]) -> Vec<bool> {
    let mut tails: Vec<usize> = Vec::new();
    let mut predecessors: Vec<Option<usize>> = vec![None; values.len()];

    for (position, &value) in values.iter().enumerate() {
        let slot = tails.partition_point(|&tail| values[tail] < value);
        predecessors[position] = slot.checked_sub(1).map(|previous| tails[previous]);
        if slot == tails.len() {
            tails.push(position);
        } else {
            tails[slot] = position;
        }
    }

    let mut members = vec![false; values.len()];
    let mut cursor = tails.last().copied();
    while let Some(position) = cursor {
        members[position] = true;
        cursor = predecessors[position];
    }

    members
}
