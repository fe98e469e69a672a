use std::path::Path;

use crate::{
    domain::{reconcile::reconcile, transition::ListTransition},
    infra::{contracts::SnapshotSource, error::AppError, snapshot_file::SnapshotEntry},
};

#[derive(Debug, Clone, Copy)]
pub struct DiffRequest<'a> {
    pub old: &'a Path,
    pub new: &'a Path,
    pub verify: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiffOutput {
    pub old_len: usize,
    pub new_len: usize,
    pub transition: ListTransition<SnapshotEntry>,
    pub verified: bool,
}

pub fn diff_snapshots(
    source: &dyn SnapshotSource,
    request: DiffRequest<'_>,
) -> Result<DiffOutput, AppError> {
    let old = source.load_snapshot(request.old)?;
    let new = source.load_snapshot(request.new)?;

    let transition = reconcile(&old, &new);

    if request.verify {
        verify_replay(&transition, &old, &new)?;
    }

    tracing::info!(
        old = %request.old.display(),
        new = %request.new.display(),
        operations = transition.len(),
        verified = request.verify,
        "snapshots diffed"
    );

    Ok(DiffOutput {
        old_len: old.len(),
        new_len: new.len(),
        transition,
        verified: request.verify,
    })
}

/// Loads a snapshot and returns its entry count.
pub fn check_snapshot(source: &dyn SnapshotSource, path: &Path) -> Result<usize, AppError> {
    let entries = source.load_snapshot(path)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "snapshot is valid");

    Ok(entries.len())
}

fn verify_replay(
    transition: &ListTransition<SnapshotEntry>,
    old: &[SnapshotEntry],
    new: &[SnapshotEntry],
) -> Result<(), AppError> {
    let replayed = transition.apply(old)?;
    if replayed == new {
        return Ok(());
    }

    Err(AppError::ReplayMismatch(format!(
        "expected [{}], got [{}]",
        joined_ids(new),
        joined_ids(&replayed)
    )))
}

fn joined_ids(entries: &[SnapshotEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
