use axum::{Json, http::StatusCode, response::IntoResponse};

pub async fn welcome() -> impl IntoResponse {
    Json(serde_json::json!({
        "msg": "Welcome to the Student API",
    }))
}

pub async fn about() -> impl IntoResponse {
    Json(serde_json::json!({
        "msg": "about endpoint",
    }))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
