use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use rollcall_infra::repository::RepoError;

/// Fixed body returned for any store failure, whatever the cause. Detail
/// goes to the log, never to the caller.
pub const GENERIC_FAILURE: &str = "Something went wrong in the server";

pub fn repo_error_to_response(err: RepoError) -> axum::response::Response {
    tracing::error!(error = %err, "store operation failed");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", GENERIC_FAILURE)
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
