use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinsightError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FinsightError {
    fn from(e: serde_json::Error) -> Self {
        FinsightError::SerializationError(e.to_string())
    }
}
