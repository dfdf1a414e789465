//! Prediction client error types.

use thiserror::Error;

pub type PredictResult<T> = Result<T, PredictError>;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Service error: {0}")]
    Service(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PredictError {
    /// Descriptive text carried by the failure, for banner interpolation.
    pub fn detail(&self) -> String {
        match self {
            PredictError::NotFound(msg) | PredictError::Service(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
