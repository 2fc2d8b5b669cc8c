use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoomError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type RoomResult<T> = Result<T, RoomError>;
