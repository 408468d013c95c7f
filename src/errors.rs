use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid review state: {0}")]
    InvalidState(&'static str),
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("storage error: {0}")]
    Storage(&'static str),
}
