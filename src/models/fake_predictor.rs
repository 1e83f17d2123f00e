use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::prediction::{InputFeatures, PredictionResult, WeatherKind};
use crate::models::predictor::{PredictionError, Predictor};
use crate::models::reading::WeatherReading;

pub const FAKE_PREDICTOR_FREEZING_POINT: f64 = 2.0;
pub const FAKE_PREDICTOR_RAIN_THRESHOLD: f64 = 1.5;
pub const FAKE_PREDICTOR_CALM_WIND: f64 = 2.0;
pub const FAKE_PREDICTOR_FOG_TEMP_RANGE: f64 = 5.0;

/// In-process stand in for the prediction service, for local development
/// and tests.
pub struct FakePredictor {
    pub name: String,
    pub failing: bool,
    requests: AtomicUsize,
}

pub fn create(name: String) -> FakePredictor {
    FakePredictor {
        name,
        failing: false,
        requests: AtomicUsize::new(0),
    }
}

pub fn create_failing(name: String) -> FakePredictor {
    FakePredictor {
        failing: true,
        ..create(name)
    }
}

impl FakePredictor {
    /// Number of predictions requested so far, failed ones included.
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

fn classify(reading: &WeatherReading) -> (WeatherKind, f64) {
    let temp_range = reading.temp_max - reading.temp_min;
    if reading.precipitation > 0.0 && reading.temp_max <= FAKE_PREDICTOR_FREEZING_POINT {
        (WeatherKind::Snow, 70.0 + reading.precipitation.min(20.0))
    } else if reading.precipitation >= FAKE_PREDICTOR_RAIN_THRESHOLD {
        (WeatherKind::Rain, 60.0 + reading.precipitation.min(35.0))
    } else if reading.precipitation > 0.0 {
        (WeatherKind::Drizzle, 55.0 + 10.0 * reading.precipitation)
    } else if reading.wind < FAKE_PREDICTOR_CALM_WIND && temp_range < FAKE_PREDICTOR_FOG_TEMP_RANGE
    {
        (WeatherKind::Fog, 50.0 + 5.0 * (FAKE_PREDICTOR_FOG_TEMP_RANGE - temp_range))
    } else {
        (WeatherKind::Sun, 60.0 + temp_range.min(35.0))
    }
}

// The service reports confidence rounded to two decimals.
fn round_confidence(confidence: f64) -> f64 {
    (confidence.clamp(0.0, 100.0) * 100.0).round() / 100.0
}

#[async_trait]
impl Predictor for FakePredictor {
    async fn predict(&self, reading: &WeatherReading) -> Result<PredictionResult, PredictionError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        log::debug!(
            "Fake predictor {} handling request {}",
            &self.name,
            self.request_count()
        );
        if self.failing {
            log::info!("Fake predictor {} refusing to predict", &self.name);
            return Err(PredictionError::Unavailable(self.name.clone()));
        }
        let (kind, confidence) = classify(reading);
        log::info!(
            "Fake predictor {} predicts {} for {:?}",
            &self.name,
            kind.name(),
            reading
        );
        Ok(PredictionResult {
            prediction: kind.name().to_string(),
            confidence_percent: round_confidence(confidence),
            input_features: Some(InputFeatures {
                precipitation: reading.precipitation,
                temp_max: reading.temp_max,
                temp_min: reading.temp_min,
                wind: reading.wind,
                temp_range: reading.temp_max - reading.temp_min,
            }),
        })
    }
}
