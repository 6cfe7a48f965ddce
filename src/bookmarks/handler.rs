use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::api::SearchParams;
use crate::error::ApiError;
use crate::handler::AppState;
use crate::model::{Bookmark, NewBookmark};

pub async fn list_bookmarks(State(state): State<AppState>) -> Json<Vec<Bookmark>> {
    Json(state.store.list().await)
}

/// Decodes the raw body so that any malformed payload is a 400, whatever the
/// request's content type. A `null` body creates an empty bookmark.
pub async fn create_bookmark(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Bookmark>), ApiError> {
    let candidate = serde_json::from_slice::<Option<NewBookmark>>(&body)?.unwrap_or_default();
    let bookmark = state.store.create(candidate).await;
    tracing::debug!(id = bookmark.id, url = %bookmark.url, "bookmark created");

    Ok((StatusCode::CREATED, Json(bookmark)))
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| ApiError::BadRequest("Invalid ID".to_string()))?;

    state.store.delete(id).await?;
    tracing::debug!(id, "bookmark deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/bookmarks/` carries an empty id segment.
pub async fn delete_without_id() -> ApiError {
    ApiError::BadRequest("Invalid ID".to_string())
}

/// Catches paths the routes above do not match. Anything nested deeper under
/// `/api/bookmarks/` has no parseable trailing id.
pub async fn unmatched(method: Method, uri: Uri) -> Response {
    if !uri.path().starts_with("/api/bookmarks/") {
        return StatusCode::NOT_FOUND.into_response();
    }

    match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::DELETE => ApiError::BadRequest("Invalid ID".to_string()).into_response(),
        _ => ApiError::MethodNotAllowed.into_response(),
    }
}

pub async fn search_bookmarks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Bookmark>> {
    Json(state.store.search(params.query()).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BookmarkStore;

    async fn seeded_state() -> AppState {
        AppState::new(BookmarkStore::seeded().await)
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_json() {
        let state = seeded_state().await;
        let result = create_bookmark(State(state.clone()), Bytes::from_static(b"{oops")).await;

        match result {
            Err(ApiError::BadRequest(_)) => (),
            other => panic!("Expected BadRequest, got {:?}", other.map(|(s, _)| s)),
        }
        assert_eq!(state.store.len().await, 3);
    }

    #[tokio::test]
    async fn test_create_returns_created() {
        let state = seeded_state().await;
        let body = Bytes::from_static(br#"{"url":"https://x.test","title":"X","tags":"a,b"}"#);

        let (status, Json(bookmark)) = create_bookmark(State(state), body).await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(bookmark.id, 4);
        assert_eq!(bookmark.tags, "a,b");
    }

    #[tokio::test]
    async fn test_create_accepts_null_body() {
        let state = seeded_state().await;
        let (status, Json(bookmark)) =
            create_bookmark(State(state), Bytes::from_static(b"null")).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(bookmark.id, 4);
        assert_eq!(bookmark.url, "");
    }

    #[tokio::test]
    async fn test_unmatched_nested_path() {
        let uri: Uri = "/api/bookmarks/1/2".parse().unwrap();
        let response = unmatched(Method::DELETE, uri.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = unmatched(Method::GET, uri).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = unmatched(Method::GET, "/nowhere".parse().unwrap()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_rejects_non_numeric_id() {
        let state = seeded_state().await;
        let result = delete_bookmark(State(state), Path("abc".to_string())).await;

        match result {
            Err(ApiError::BadRequest(msg)) => assert_eq!(msg, "Invalid ID"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let state = seeded_state().await;
        let result = delete_bookmark(State(state), Path("9999".to_string())).await;

        match result {
            Err(ApiError::NotFound(msg)) => assert_eq!(msg, "Bookmark not found"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_without_query_lists_all() {
        let state = seeded_state().await;
        let Json(results) =
            search_bookmarks(State(state), Query(SearchParams::default())).await;
        assert_eq!(results.len(), 3);
    }
}
