use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open database '{0}'")]
    Open(PathBuf, #[source] rusqlite::Error),

    #[error("Failed to create database directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),

    #[error("Database operation failed")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Database connection lock was poisoned")]
    Poisoned,

    #[error("Database connection is still in use and cannot be closed")]
    StillShared,

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
