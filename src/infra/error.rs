use std::path::PathBuf;

use thiserror::Error;

use crate::domain::transition::ApplyError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to read snapshot file at {path}: {source}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse snapshot file at {path}: {source}")]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("snapshot {path} repeats id {id:?} at entries {first} and {second}")]
    DuplicateIdentity {
        path: PathBuf,
        id: String,
        first: usize,
        second: usize,
    },
    #[error("replayed transition does not reproduce the new snapshot: {0}")]
    ReplayMismatch(String),
    #[error("transition does not fit the old snapshot: {0}")]
    Replay(#[from] ApplyError),
}
