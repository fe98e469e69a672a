use thiserror::Error;

use super::entry::RenderRow;

/// An entry placed at `index` of the new snapshot.
///
/// `previous_index` is set when the identity existed in the old snapshot and
/// had to be re-inserted because its relative order changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion<E> {
    pub index: usize,
    pub entry: E,
    pub previous_index: Option<usize>,
}

impl<E> Insertion<E> {
    pub fn is_move(&self) -> bool {
        self.previous_index.is_some()
    }
}

/// An entry that kept its relative position but whose content changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update<E> {
    pub index: usize,
    pub entry: E,
    pub previous_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOperation<E> {
    Delete {
        index: usize,
    },
    Insert {
        index: usize,
        entry: E,
        previous_index: Option<usize>,
    },
    Update {
        index: usize,
        entry: E,
        previous_index: usize,
    },
}

impl<E> ListOperation<E> {
    /// Old-snapshot index for deletions, new-snapshot index otherwise.
    pub fn index(&self) -> usize {
        match self {
            Self::Delete { index } | Self::Insert { index, .. } | Self::Update { index, .. } => {
                *index
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Delete,
    Insert,
    Update,
}

impl OperationKind {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Insert => "insert",
            Self::Update => "update",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("{} index {index} is out of range for a list of {len} rows", .kind.as_label())]
    IndexOutOfRange {
        kind: OperationKind,
        index: usize,
        len: usize,
    },
}

/// The edit operations turning one snapshot into another.
///
/// Deletions index into the old snapshot; insertions and updates index into
/// the new one. Apply deletions first (highest index first), then insertions
/// and updates by ascending index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTransition<E> {
    pub deletions: Vec<usize>,
    pub insertions: Vec<Insertion<E>>,
    pub updates: Vec<Update<E>>,
}

impl<E> Default for ListTransition<E> {
    fn default() -> Self {
        Self {
            deletions: Vec::new(),
            insertions: Vec::new(),
            updates: Vec::new(),
        }
    }
}

impl<E> ListTransition<E> {
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.insertions.is_empty() && self.updates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.deletions.len() + self.insertions.len() + self.updates.len()
    }

    pub fn moves(&self) -> usize {
        self.insertions.iter().filter(|item| item.is_move()).count()
    }

    /// Converts entries into another representation, keeping every index.
    pub fn map<R>(self, mut f: impl FnMut(E) -> R) -> ListTransition<R> {
        ListTransition {
            deletions: self.deletions,
            insertions: self
                .insertions
                .into_iter()
                .map(|item| Insertion {
                    index: item.index,
                    entry: f(item.entry),
                    previous_index: item.previous_index,
                })
                .collect(),
            updates: self
                .updates
                .into_iter()
                .map(|item| Update {
                    index: item.index,
                    entry: f(item.entry),
                    previous_index: item.previous_index,
                })
                .collect(),
        }
    }

    /// Renders only the entries that are actually inserted or updated.
    pub fn materialize<C: ?Sized>(self, context: &C) -> ListTransition<<E as RenderRow<C>>::Row>
    where
        E: RenderRow<C>,
    {
        self.map(|entry| entry.render_row(context))
    }

    /// Flattens the transition into operations in application order.
    pub fn into_operations(self) -> Vec<ListOperation<E>> {
        let mut operations = Vec::with_capacity(self.len());

        let mut deletions = self.deletions;
        deletions.sort_unstable_by(|lhs, rhs| rhs.cmp(lhs));
        operations.extend(
            deletions
                .into_iter()
                .map(|index| ListOperation::Delete { index }),
        );

        let mut placements: Vec<ListOperation<E>> = self
            .insertions
            .into_iter()
            .map(|item| ListOperation::Insert {
                index: item.index,
                entry: item.entry,
                previous_index: item.previous_index,
            })
            .chain(self.updates.into_iter().map(|item| ListOperation::Update {
                index: item.index,
                entry: item.entry,
                previous_index: item.previous_index,
            }))
            .collect();
        placements.sort_by_key(ListOperation::index);
        operations.extend(placements);

        operations
    }

    /// Replays the transition against `old` and returns the resulting list.
    pub fn apply(&self, old: &[E]) -> Result<Vec<E>, ApplyError>
    where
        E: Clone,
    {
        let mut items = old.to_vec();

        let mut deletions = self.deletions.clone();
        deletions.sort_unstable_by(|lhs, rhs| rhs.cmp(lhs));
        deletions.dedup();
        for index in deletions {
            if index >= items.len() {
                return Err(ApplyError::IndexOutOfRange {
                    kind: OperationKind::Delete,
                    index,
                    len: items.len(),
                });
            }
            items.remove(index);
        }

        let mut placements: Vec<(usize, &E, OperationKind)> = self
            .insertions
            .iter()
            .map(|item| (item.index, &item.entry, OperationKind::Insert))
            .chain(
                self.updates
                    .iter()
                    .map(|item| (item.index, &item.entry, OperationKind::Update)),
            )
            .collect();
        placements.sort_by_key(|(index, _, _)| *index);

        for (index, entry, kind) in placements {
            let len = items.len();
            match kind {
                OperationKind::Insert if index <= len => items.insert(index, entry.clone()),
                OperationKind::Update if index < len => items[index] = entry.clone(),
                _ => return Err(ApplyError::IndexOutOfRange { kind, index, len }),
            }
        }

        Ok(items)
    }
}
