//! Application state.

use std::sync::Arc;

use boxview_client::PredictClient;

use crate::config::ApiConfig;

/// Shared application state.
///
/// Nothing here is mutable: requests are fully independent and each detect
/// call is its own round trip to the model service.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub predict: Arc<PredictClient>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let predict = PredictClient::from_env()?;

        Ok(Self {
            config,
            predict: Arc::new(predict),
        })
    }

    /// Create state with an existing client, for tests.
    pub fn with_client(config: ApiConfig, predict: PredictClient) -> Self {
        Self {
            config,
            predict: Arc::new(predict),
        }
    }
}
