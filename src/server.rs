use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
    routing::get,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::bookmarks;
use crate::handler::{AppState, healthcheck, preflight};
use crate::middleware::log_request;

pub const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";

/// Builds the full application router around `state`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck).options(preflight))
        .merge(bookmarks::routes())
        .layer(middleware::from_fn(log_request))
        .layer(cors())
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .layer(cors_header(header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .with_state(state)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// CorsLayer only emits the methods and headers lists on preflight responses.
fn cors_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(name, HeaderValue::from_static(value))
}
