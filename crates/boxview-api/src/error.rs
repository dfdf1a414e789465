//! API error types.
//!
//! Each variant's display text is the exact banner line shown to the user;
//! the handler never rewords them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use boxview_client::PredictError;
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized exception")]
    Unauthorized,

    #[error("Not found exception: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded exception")]
    RateLimited,

    #[error("Exception when calling model->predict: {0}")]
    Predict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Predict(_) => StatusCode::BAD_GATEWAY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::Unauthorized => ApiError::Unauthorized,
            PredictError::NotFound(detail) => ApiError::NotFound(detail),
            PredictError::RateLimited => ApiError::RateLimited,
            other => ApiError::Predict(other.detail()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_error_mapping() {
        assert!(matches!(
            ApiError::from(PredictError::Unauthorized),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from(PredictError::RateLimited),
            ApiError::RateLimited
        ));
        match ApiError::from(PredictError::NotFound("missing".to_string())) {
            ApiError::NotFound(detail) => assert_eq!(detail, "missing"),
            other => panic!("unexpected error: {other:?}"),
        }
        match ApiError::from(PredictError::Service("boom".to_string())) {
            ApiError::Predict(detail) => assert_eq!(detail, "boom"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_into_response_status() {
        assert_eq!(
            ApiError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::RateLimited.into_response().status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::bad_request("not an image").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Predict("down".to_string()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_banner_text() {
        assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized exception");
        assert_eq!(
            ApiError::NotFound("X".to_string()).to_string(),
            "Not found exception: X"
        );
        assert_eq!(
            ApiError::RateLimited.to_string(),
            "Rate limit exceeded exception"
        );
        assert_eq!(
            ApiError::Predict("Y".to_string()).to_string(),
            "Exception when calling model->predict: Y"
        );
    }
}
