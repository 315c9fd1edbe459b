use axum::{Router, routing::get};

pub mod students;
pub mod system;

/// Router for all endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::welcome))
        .route("/about", get(system::about))
        .route("/health", get(system::health))
        .nest("/students", students::router())
}
