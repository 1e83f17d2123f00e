use askama::Template;
use axum::Json;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Response};

use crate::error::InternalError;
use crate::routes::weather::render_weather;
use crate::view::PageView;

#[derive(Template)]
#[template(path = "index.html", escape = "none")]
struct IndexTemplate {
    content: String,
}

pub async fn get_index() -> Result<Response, InternalError> {
    let content = render_weather(&PageView::new())?;
    Ok(Html(render_main(content)?).into_response())
}

pub async fn get_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub fn render_main(content: String) -> Result<String, InternalError> {
    Ok(IndexTemplate { content }.render()?)
}

/// htmx requests get the fragment, everything else the full page.
pub fn render_for(headers: &HeaderMap, content: String) -> Result<String, InternalError> {
    if headers.get("hx-request").is_some() {
        Ok(content)
    } else {
        render_main(content)
    }
}
