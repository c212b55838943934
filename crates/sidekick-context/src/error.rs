use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, ContextError>;
