use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VcfError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VcfError>;
