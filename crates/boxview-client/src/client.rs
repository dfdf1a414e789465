//! Prediction service HTTP client.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::error::{PredictError, PredictResult};
use crate::types::{HealthResponse, PredictRequest, PredictResponse};

/// Configuration for the prediction client.
#[derive(Debug, Clone)]
pub struct PredictConfig {
    /// Base URL of the hosted model service
    pub base_url: String,
    /// Fixed model identifier selecting the hosted model
    pub model_id: String,
    /// Optional bearer token for the service
    pub api_token: Option<String>,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            model_id: "mdl-xd03onbvnj3u2".to_string(),
            api_token: None,
            timeout: Duration::from_secs(120),
        }
    }
}

impl PredictConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("MODEL_SERVICE_URL").unwrap_or(defaults.base_url),
            model_id: std::env::var("MODEL_ID").unwrap_or(defaults.model_id),
            api_token: std::env::var("MODEL_API_TOKEN").ok(),
            timeout: Duration::from_secs(
                std::env::var("MODEL_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(120),
            ),
        }
    }
}

/// Client for the hosted object-detection service.
pub struct PredictClient {
    http: Client,
    config: PredictConfig,
}

impl PredictClient {
    /// Create a new prediction client.
    pub fn new(config: PredictConfig) -> PredictResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(PredictError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> PredictResult<Self> {
        Self::new(PredictConfig::from_env())
    }

    /// The fixed model identifier this client is bound to.
    pub fn model_id(&self) -> &str {
        &self.config.model_id
    }

    /// Check if the model service is healthy.
    pub async fn health_check(&self) -> PredictResult<bool> {
        let url = format!("{}/health", self.config.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let health: HealthResponse = response.json().await?;
                Ok(health.status == "healthy" || health.status == "ok")
            }
            Ok(response) => {
                warn!("Model service health check failed: {}", response.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Model service health check error: {}", e);
                Ok(false)
            }
        }
    }

    /// Run detection on a base64-encoded JPEG and return the annotated
    /// image, also base64.
    ///
    /// One call per invocation, no retries: the caller surfaces whatever
    /// the service reports.
    pub async fn predict(&self, input_data: String) -> PredictResult<String> {
        let url = format!("{}/predict/{}", self.config.base_url, self.config.model_id);

        debug!("Sending predict request to {}", url);

        let mut request = self.http.post(&url).json(&PredictRequest { input_data });
        if let Some(token) = &self.config.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(PredictError::Network)?;
        let status = response.status();
        let body = response.text().await.map_err(PredictError::Network)?;

        if !status.is_success() {
            return Err(Self::error_for_status(status, body));
        }

        debug!("Predict response: {}", body);

        let parsed: PredictResponse = serde_json::from_str(&body)?;
        parsed.image.ok_or_else(|| {
            PredictError::InvalidResponse("response is missing the image field".to_string())
        })
    }

    fn error_for_status(status: StatusCode, body: String) -> PredictError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => PredictError::Unauthorized,
            StatusCode::NOT_FOUND => PredictError::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => PredictError::RateLimited,
            _ => PredictError::Service(format!("model service returned {}: {}", status, body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PredictConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert_eq!(config.model_id, "mdl-xd03onbvnj3u2");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_error_for_status() {
        assert!(matches!(
            PredictClient::error_for_status(StatusCode::UNAUTHORIZED, String::new()),
            PredictError::Unauthorized
        ));
        assert!(matches!(
            PredictClient::error_for_status(StatusCode::FORBIDDEN, String::new()),
            PredictError::Unauthorized
        ));
        match PredictClient::error_for_status(StatusCode::NOT_FOUND, "no such model".to_string()) {
            PredictError::NotFound(detail) => assert_eq!(detail, "no such model"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            PredictClient::error_for_status(StatusCode::TOO_MANY_REQUESTS, String::new()),
            PredictError::RateLimited
        ));
        assert!(matches!(
            PredictClient::error_for_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            PredictError::Service(_)
        ));
    }
}
