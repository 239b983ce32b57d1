pub mod config;
pub mod error;
pub mod state;
pub mod forms;
pub mod models;
pub mod routes;
pub mod submission;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::forms::{FormsClient, UpstreamError};
use crate::state::{AppState, SharedState};

pub fn build_app(config: &Config) -> Result<Router, UpstreamError> {
    let forms = FormsClient::new(config)?;
    tracing::info!("Forwarding to forms API at {}", config.forms_api_base_url);

    let state: SharedState = Arc::new(AppState { forms });

    let app = Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state);

    Ok(app)
}

async fn health() -> &'static str {
    "ok"
}
