use serde::Deserialize;

use crate::infra::config::{AppConfig, DuplicatePolicy, LogConfig, SnapshotConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub snapshots: Option<FileSnapshotConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(snapshots) = self.snapshots {
            snapshots.merge_into(&mut config.snapshots);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSnapshotConfig {
    pub duplicate_policy: Option<DuplicatePolicy>,
}

impl FileSnapshotConfig {
    fn merge_into(self, config: &mut SnapshotConfig) {
        if let Some(policy) = self.duplicate_policy {
            config.duplicate_policy = policy;
        }
    }
}
