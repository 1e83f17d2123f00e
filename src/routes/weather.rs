use askama::Template;
use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};
use axum::{Router, routing::post};

use crate::app::AppState;
use crate::error::InternalError;
use crate::models::predictor::Predictor;
use crate::models::randomizer::random_reading;
use crate::models::reading::RawReading;
use crate::models::validation::validate;
use crate::routes::index::render_for;
use crate::view::{FormView, PageView, ResultView};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/randomize", post(randomize))
        .with_state(state)
}

#[derive(Template)]
#[template(path = "weather.html")]
struct WeatherTemplate<'a> {
    form: &'a FormView,
    result: &'a ResultView,
}

#[derive(Template)]
#[template(path = "weather_form.html")]
struct WeatherFormTemplate<'a> {
    form: &'a FormView,
}

pub fn render_weather(view: &PageView) -> Result<String, InternalError> {
    Ok(WeatherTemplate {
        form: &view.form,
        result: &view.result,
    }
    .render()?)
}

/// Runs one submission through validation and prediction. Invalid forms
/// never reach the predictor.
pub async fn submit(predictor: &dyn Predictor, view: PageView, raw: &RawReading) -> PageView {
    let view = view.with_form(FormView::from_raw(raw));
    let reading = match validate(raw) {
        Ok(reading) => reading,
        Err(errors) => return view.with_validation_errors(&errors),
    };
    match predictor.predict(&reading).await {
        Ok(result) => view.with_prediction(&result),
        Err(error) => {
            log::error!("Failed to get prediction: {}", error);
            view.with_prediction_error()
        }
    }
}

fn respond(headers: &HeaderMap, view: &PageView) -> Result<Response, InternalError> {
    if view.form.has_errors() && headers.get("hx-request").is_some() {
        // Only swap the form so the last result stays on the page.
        let content = WeatherFormTemplate { form: &view.form }.render()?;
        return Ok(([("HX-Retarget", "#weather-form")], Html(content)).into_response());
    }
    let content = render_for(headers, render_weather(view)?)?;
    Ok(Html(content).into_response())
}

async fn predict(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(raw): Form<RawReading>,
) -> Result<Response, InternalError> {
    let view = submit(state.predictor.as_ref(), PageView::new(), &raw).await;
    respond(&headers, &view)
}

async fn randomize(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, InternalError> {
    let (kind, reading) = random_reading(&mut rand::rng());
    log::info!("Submitting random {} reading", kind.name());
    let view = submit(
        state.predictor.as_ref(),
        PageView::new(),
        &RawReading::from(&reading),
    )
    .await;
    respond(&headers, &view)
}
