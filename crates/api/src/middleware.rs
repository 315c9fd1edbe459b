use axum::{middleware::Next, response::Response};

/// Request logging middleware.
///
/// Records every request's method and target before it reaches a handler.
/// Observes only; it never alters the request or short-circuits the chain.
pub async fn log_requests(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    tracing::info!(method = %req.method(), uri = %req.uri(), "request");
    next.run(req).await
}
