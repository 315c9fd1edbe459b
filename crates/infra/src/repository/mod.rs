//! Record storage abstraction.
//!
//! A `Repository` owns persistence, identity assignment, and whatever
//! consistency the backing store provides. Callers get exactly four
//! operations and one error type; everything else is the store's business.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use rollcall_core::Resource;

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresStudentStore;

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Failure raised by a repository.
///
/// A single kind is modeled on purpose: callers forward whatever the backing
/// store reports without classifying it further, and the transport layer
/// answers every store failure the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepoError {
    #[error("repository operation failed: {0}")]
    Operation(String),
}

impl RepoError {
    pub fn operation(msg: impl Into<String>) -> Self {
        Self::Operation(msg.into())
    }
}

/// Storage interface for one record type.
///
/// - `list` returns records in the store's native order, narrowed by the
///   filter; no match is an empty list, not an error.
/// - `get` treats a missing id as an answer (`Ok(None)`), not a failure.
/// - `create` assigns the id; drafts never carry one.
/// - `update` applies a partial patch; an unknown id is a store failure.
#[async_trait]
pub trait Repository<R: Resource>: Send + Sync {
    async fn list(&self, filter: R::Filter) -> RepoResult<Vec<R>>;
    async fn get(&self, id: &R::Id) -> RepoResult<Option<R>>;
    async fn create(&self, draft: R::Draft) -> RepoResult<R>;
    async fn update(&self, id: &R::Id, patch: R::Patch) -> RepoResult<R>;
}

#[async_trait]
impl<R, S> Repository<R> for Arc<S>
where
    R: Resource,
    S: Repository<R> + ?Sized,
{
    async fn list(&self, filter: R::Filter) -> RepoResult<Vec<R>> {
        (**self).list(filter).await
    }

    async fn get(&self, id: &R::Id) -> RepoResult<Option<R>> {
        (**self).get(id).await
    }

    async fn create(&self, draft: R::Draft) -> RepoResult<R> {
        (**self).create(draft).await
    }

    async fn update(&self, id: &R::Id, patch: R::Patch) -> RepoResult<R> {
        (**self).update(id, patch).await
    }
}
