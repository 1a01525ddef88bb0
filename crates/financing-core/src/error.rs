use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinancingError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FinancingError {
    fn from(e: serde_json::Error) -> Self {
        FinancingError::SerializationError(e.to_string())
    }
}
