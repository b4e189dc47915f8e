use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    /// Missing or malformed input, detected before storage is touched
    #[error("{0}")]
    Validation(String),

    /// Constraint violation, transaction failure or any other storage fault
    #[error("{0:#}")]
    Storage(#[from] eyre::Report),
}

pub type TutorResult<T> = Result<T, TutorError>;

impl TutorError {
    pub fn validation(message: impl Into<String>) -> Self {
        TutorError::Validation(message.into())
    }
}
