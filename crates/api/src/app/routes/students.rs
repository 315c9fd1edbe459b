use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use rollcall_core::RecordId;
use rollcall_students::StudentId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_student).get(list_students))
        .route("/:id", get(get_student).patch(update_student))
}

pub async fn list_students(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListStudentsQuery>,
) -> axum::response::Response {
    match services.students().list(query.into_filter()).await {
        Ok(students) => {
            let items = students
                .into_iter()
                .map(dto::student_to_json)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::Value::Array(items))).into_response()
        }
        Err(e) => errors::repo_error_to_response(e),
    }
}

pub async fn get_student(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid student id");
        }
    };

    match services.students().get(&StudentId::new(id)).await {
        // An unknown id is an answer, not an error: 200 with a JSON null body.
        Ok(found) => (StatusCode::OK, Json(found.map(dto::student_to_json))).into_response(),
        Err(e) => errors::repo_error_to_response(e),
    }
}

pub async fn create_student(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateStudentRequest>,
) -> axum::response::Response {
    match services.students().create(body.into_draft()).await {
        Ok(student) => (StatusCode::CREATED, Json(dto::student_to_json(student))).into_response(),
        Err(e) => errors::repo_error_to_response(e),
    }
}

pub async fn update_student(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateStudentRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid student id");
        }
    };

    match services
        .students()
        .update(&StudentId::new(id), body.into_patch())
        .await
    {
        Ok(student) => (StatusCode::OK, Json(dto::student_to_json(student))).into_response(),
        Err(e) => errors::repo_error_to_response(e),
    }
}
