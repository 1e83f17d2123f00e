use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use thiserror::Error;

use crate::models::prediction::PredictionResult;
use crate::models::reading::WeatherReading;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction service answered with status {0}")]
    Status(StatusCode),
    #[error("could not reach prediction service")]
    Transport {
        #[from]
        source: reqwest::Error,
    },
    #[error("invalid response from prediction service")]
    Decode {
        #[from]
        source: serde_json::Error,
    },
    #[error("prediction service unavailable: {0}")]
    Unavailable(String),
}

/// Something that can turn a reading into a weather prediction.
///
/// Each call is a single best effort attempt, there is no retry.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(&self, reading: &WeatherReading) -> Result<PredictionResult, PredictionError>;
}

pub type PredictorHandle = Arc<dyn Predictor>;

#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: reqwest::Client,
    url: String,
}

impl HttpPredictor {
    pub fn new(url: String) -> HttpPredictor {
        HttpPredictor {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, reading: &WeatherReading) -> Result<PredictionResult, PredictionError> {
        log::info!("Requesting prediction from {} for {:?}", self.url, reading);
        let response = self.client.post(&self.url).json(reading).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status));
        }
        let body = response.bytes().await?;
        let result: PredictionResult = serde_json::from_slice(&body)?;
        if let Some(features) = &result.input_features {
            log::debug!("Prediction service used features {:?}", features);
        }
        log::info!(
            "Prediction service answered {} ({}%)",
            result.prediction,
            result.confidence_percent
        );
        Ok(result)
    }
}
