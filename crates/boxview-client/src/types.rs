//! Prediction service request/response types.

use serde::{Deserialize, Serialize};

/// Request body for the predict endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Base64-encoded JPEG input
    pub input_data: String,
}

/// Response from the predict endpoint.
///
/// The service promises an `image` field on success, but the field is kept
/// optional here so a malformed reply becomes an error value instead of a
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Base64-encoded annotated image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: Option<String>,
}
