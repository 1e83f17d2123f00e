use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{Config, PredictorConfig};
use crate::models::fake_predictor;
use crate::models::predictor::{HttpPredictor, PredictorHandle};
use crate::routes::{index, weather};

// Anything that goes in here must be a handle or pointer that can be cloned.
// The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub predictor: PredictorHandle,
}

pub fn create_predictor(config: &PredictorConfig) -> PredictorHandle {
    match config {
        PredictorConfig::Http { url } => {
            log::info!("Using prediction service at {}", url);
            Arc::new(HttpPredictor::new(url.clone()))
        }
        PredictorConfig::Fake { failing: false } => {
            log::info!("Using fake predictor");
            Arc::new(fake_predictor::create("fake".to_string()))
        }
        PredictorConfig::Fake { failing: true } => {
            log::info!("Using failing fake predictor");
            Arc::new(fake_predictor::create_failing("fake".to_string()))
        }
    }
}

pub fn create_app(config: &Config) -> Router {
    let state = AppState {
        predictor: create_predictor(&config.predictor),
    };
    create_app_with_state(state, &config.server.assets_path)
}

pub fn create_app_with_state(state: AppState, assets_path: &str) -> Router {
    let mut app = Router::new()
        .route("/", get(index::get_index))
        .route("/health", get(index::get_health))
        .merge(weather::routes(state))
        .layer(TraceLayer::new_for_http());

    log::debug!("serving assets from {}", assets_path);
    let assets_service = ServeDir::new(assets_path);
    app = app.fallback_service(assets_service);
    app
}
