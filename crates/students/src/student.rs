use serde::{Deserialize, Serialize};

use rollcall_core::{RecordId, Resource, ResourceFilter};

/// Student identifier. Assigned by the backing store on create.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub RecordId);

impl StudentId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for StudentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A single student record.
///
/// `email` is intended to be unique but nothing in this service enforces it;
/// a backing store that does reports the violation as a store failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Fields supplied when creating a student. Carries no id by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial update. `None` fields keep their current value; the id is not
/// patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Equality filters for listing students.
///
/// Email must match exactly; names match case-insensitively. The default
/// filter matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Resource for Student {
    type Id = StudentId;
    type Draft = StudentDraft;
    type Patch = StudentPatch;
    type Filter = StudentFilter;

    fn id(&self) -> &StudentId {
        &self.id
    }

    fn fresh_id() -> StudentId {
        StudentId(RecordId::new())
    }

    fn from_draft(id: StudentId, draft: StudentDraft) -> Self {
        Self {
            id,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
        }
    }

    fn apply_patch(&mut self, patch: StudentPatch) {
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
    }
}

impl ResourceFilter<Student> for StudentFilter {
    fn matches(&self, record: &Student) -> bool {
        if let Some(email) = &self.email {
            if record.email != *email {
                return false;
            }
        }
        if let Some(first_name) = &self.first_name {
            if !record.first_name.eq_ignore_ascii_case(first_name) {
                return false;
            }
        }
        if let Some(last_name) = &self.last_name {
            if !record.last_name.eq_ignore_ascii_case(last_name) {
                return false;
            }
        }
        true
    }
}
