use std::sync::Arc;

use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::HealthResponse;
use crate::error::ApiError;
use crate::store::BookmarkStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookmarkStore>,
}

impl AppState {
    pub fn new(store: BookmarkStore) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}

pub async fn healthcheck() -> impl IntoResponse {
    Json(HealthResponse::healthy())
}

/// Router-level answer to `OPTIONS`. Behind [`crate::server::app`] the cors
/// layer intercepts these first.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
