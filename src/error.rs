// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the chat flow itself: loading data, parsing
/// identifiers sent by clients, serving requests or reading the console.
/// Lookup misses and rejected translations are not errors.
#[derive(Error, Debug)]
pub enum TalkieError {
    #[error("Failed to read seed file {}: {}", .path.display(), .source)]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),
    #[error("Unsupported dialect: {0}")]
    UnknownDialect(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
