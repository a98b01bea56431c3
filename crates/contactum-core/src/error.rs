use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid profile: {0} (expected lenient|strict)")]
    InvalidProfile(String),
}
