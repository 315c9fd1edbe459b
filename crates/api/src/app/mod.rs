//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store wiring (which repository backs the process)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
///
/// The repository lives inside `services`, constructed by the caller at
/// process start; nothing here owns storage.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::log_requests))
                .layer(Extension(services)),
        )
}
