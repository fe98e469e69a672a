use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::AppConfig,
    contracts::{ConfigAdapter, SnapshotSource},
    error::AppError,
    snapshot_file::SnapshotEntry,
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError> {
        Ok(AppConfig::default())
    }
}

/// Snapshots keyed by path, for use cases that should not touch the disk.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotSource {
    snapshots: HashMap<PathBuf, Vec<SnapshotEntry>>,
}

impl InMemorySnapshotSource {
    pub fn with(mut self, path: impl Into<PathBuf>, entries: Vec<SnapshotEntry>) -> Self {
        self.snapshots.insert(path.into(), entries);
        self
    }
}

impl SnapshotSource for InMemorySnapshotSource {
    fn load_snapshot(&self, path: &Path) -> Result<Vec<SnapshotEntry>, AppError> {
        self.snapshots
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::SnapshotRead {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no in-memory snapshot"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn in_memory_source_reports_unknown_paths() {
        let source = InMemorySnapshotSource::default();

        let error = source
            .load_snapshot(Path::new("nowhere.toml"))
            .expect_err("unknown path must fail");

        assert!(matches!(error, AppError::SnapshotRead { .. }));
    }
}
