use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for nirmala
#[derive(Debug, Error)]
pub enum NirmalaError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Model catalog is empty: configure at least one model")]
    EmptyModelCatalog,

    #[error("Duplicate filter name in config: {0}")]
    DuplicateFilter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
