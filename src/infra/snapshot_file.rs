//! TOML list snapshots.
//!
//! ```toml
//! [[entries]]
//! id = "event-10:content"
//! content = "any TOML value"
//! ```

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    domain::{entry::ListEntry, reconcile::find_duplicate},
    infra::{config::DuplicatePolicy, contracts::SnapshotSource, error::AppError},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub id: String,
    #[serde(default)]
    pub content: Option<toml::Value>,
}

/// Floats compare by bit pattern so that `nan` content equals itself.
impl PartialEq for SnapshotEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && match (&self.content, &other.content) {
                (Some(left), Some(right)) => same_value(left, right),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Eq for SnapshotEntry {}

fn same_value(left: &toml::Value, right: &toml::Value) -> bool {
    use toml::Value;

    match (left, right) {
        (Value::Float(left), Value::Float(right)) => left.to_bits() == right.to_bits(),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left.iter().zip(right).all(|(left, right)| same_value(left, right))
        }
        (Value::Table(left), Value::Table(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).is_some_and(|other| same_value(value, other)))
        }
        _ => left == right,
    }
}

impl ListEntry for SnapshotEntry {
    type StableId = String;

    fn stable_id(&self) -> String {
        self.id.clone()
    }
}

#[derive(Debug, Deserialize, Default)]
struct SnapshotFile {
    #[serde(default)]
    entries: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FileSnapshotSource {
    policy: DuplicatePolicy,
}

impl FileSnapshotSource {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self { policy }
    }
}

impl SnapshotSource for FileSnapshotSource {
    fn load_snapshot(&self, path: &Path) -> Result<Vec<SnapshotEntry>, AppError> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;

        let file: SnapshotFile = toml::from_str(&raw).map_err(|source| AppError::SnapshotParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), entries = file.entries.len(), "snapshot loaded");
        enforce_unique_ids(path, file.entries, self.policy)
    }
}

pub fn enforce_unique_ids(
    path: &Path,
    entries: Vec<SnapshotEntry>,
    policy: DuplicatePolicy,
) -> Result<Vec<SnapshotEntry>, AppError> {
    match policy {
        DuplicatePolicy::Reject => match find_duplicate(&entries) {
            Some(duplicate) => Err(AppError::DuplicateIdentity {
                path: path.to_path_buf(),
                id: duplicate.id,
                first: duplicate.first,
                second: duplicate.second,
            }),
            None => Ok(entries),
        },
        DuplicatePolicy::KeepFirst => {
            let mut seen = HashSet::with_capacity(entries.len());
            let total = entries.len();
            let unique: Vec<SnapshotEntry> = entries
                .into_iter()
                .filter(|entry| seen.insert(entry.id.clone()))
                .collect();

            if unique.len() < total {
                tracing::warn!(
                    path = %path.display(),
                    dropped = total - unique.len(),
                    "dropped repeated snapshot ids"
                );
            }

            Ok(unique)
        }
    }
}
