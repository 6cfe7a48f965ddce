use axum::{
    Router,
    routing::{delete, get},
};

use super::handler;
use crate::handler::{AppState, method_not_allowed, preflight};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/bookmarks",
            get(handler::list_bookmarks)
                .head(method_not_allowed)
                .post(handler::create_bookmark)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/bookmarks/search",
            get(handler::search_bookmarks)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/bookmarks/:id",
            delete(handler::delete_bookmark)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/bookmarks/",
            delete(handler::delete_without_id)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .fallback(handler::unmatched)
}
