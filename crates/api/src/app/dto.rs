use serde::Deserialize;

use rollcall_students::{Student, StudentDraft, StudentFilter, StudentPatch};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl CreateStudentRequest {
    pub fn into_draft(self) -> StudentDraft {
        StudentDraft {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateStudentRequest {
    pub fn into_patch(self) -> StudentPatch {
        StudentPatch {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStudentsQuery {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ListStudentsQuery {
    pub fn into_filter(self) -> StudentFilter {
        StudentFilter {
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn student_to_json(student: Student) -> serde_json::Value {
    serde_json::json!({
        "id": student.id.to_string(),
        "email": student.email,
        "firstName": student.first_name,
        "lastName": student.last_name,
    })
}
