use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapError>;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("input file not found: {0}")]
    InputMissing(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(String),
}
