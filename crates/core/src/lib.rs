//! `rollcall-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no HTTP).

pub mod error;
pub mod id;
pub mod resource;

pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use resource::{Resource, ResourceFilter};
