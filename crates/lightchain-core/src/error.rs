use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("failed to access config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid chain config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize chain config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("unknown motion type `{0}`")]
    UnknownMotion(String),
}

pub type Result<T> = std::result::Result<T, ChainError>;
