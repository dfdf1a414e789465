//! Client for the hosted object-detection service.
//!
//! The service exposes a predict endpoint that takes a base64-encoded JPEG
//! and returns the same image annotated with bounding boxes, also base64.
//! The service's failure taxonomy (unauthorized, not found, rate limited,
//! everything else) is surfaced as [`PredictError`] and mapped to user-facing
//! banners by the API layer.

pub mod client;
pub mod error;
pub mod types;

pub use client::{PredictClient, PredictConfig};
pub use error::{PredictError, PredictResult};
pub use types::{HealthResponse, PredictRequest, PredictResponse};
