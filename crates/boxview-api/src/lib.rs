//! Axum server for the object-detection upload UI.
//!
//! This crate provides:
//! - The single upload-and-detect page
//! - The detect endpoint bridging uploads to the hosted model service
//! - Error-to-banner mapping for the service's failure taxonomy

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
