//! Students domain module.
//!
//! The student record type and its create/update/list payload shapes,
//! implemented purely as data (no IO, no HTTP, no storage).

pub mod student;

pub use student::{Student, StudentDraft, StudentFilter, StudentId, StudentPatch};
