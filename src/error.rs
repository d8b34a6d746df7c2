use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort processing of a poem document or a batch item
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to read file {path:?}")]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("item {item} has no couplet (poem has {total} couplets)")]
    ItemOutOfRange { item: u32, total: usize },

    #[error("invalid item range {start}..={end}")]
    InvalidRange { start: u32, end: u32 },

    #[error("failed to build XML: {0}")]
    Xml(String),
}

pub type Result<T> = std::result::Result<T, SyncError>;
