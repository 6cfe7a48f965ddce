use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::debug;

/// Logs method, uri, status and duration of every request at debug level.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    debug!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}
