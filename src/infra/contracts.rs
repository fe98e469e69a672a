use std::path::Path;

use crate::infra::{config::AppConfig, error::AppError, snapshot_file::SnapshotEntry};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError>;
}

/// Reads one list snapshot, in file order.
pub trait SnapshotSource {
    fn load_snapshot(&self, path: &Path) -> Result<Vec<SnapshotEntry>, AppError>;
}
