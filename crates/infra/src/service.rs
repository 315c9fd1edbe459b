//! Resource CRUD service (application-level mediation).
//!
//! `ResourceService` sits between transport handlers and the repository. It
//! exposes the four CRUD operations for one record type and forwards every
//! store failure unmodified through its `Result`: no retries, no logging,
//! no reclassification at this layer. Handlers stay free of storage
//! concerns; stores stay free of transport concerns.
//!
//! The service owns no state beyond the store handle and performs no side
//! effects beyond the store calls, so concurrent invocations need no
//! coordination here; whatever atomicity `update` has is the store's.

use std::marker::PhantomData;

use rollcall_core::Resource;

use crate::repository::{RepoResult, Repository};

/// Generic CRUD service over an injected repository.
///
/// ## Generic Parameters
///
/// - `R`: the record type being served
/// - `S`: the repository implementation (any `Repository<R>`, including
///   `Arc<dyn Repository<R>>` via the blanket impl)
///
/// Construct it once with the store the process opened at startup and share
/// it for the life of the process.
///
/// ## Error Semantics
///
/// Every method returns the store's `RepoError` as-is. A `get` on an id the
/// store does not know is **not** an error: it is `Ok(None)`, and transport
/// code is expected to serialize that as a null success.
#[derive(Debug)]
pub struct ResourceService<R, S> {
    store: S,
    _record: PhantomData<fn() -> R>,
}

impl<R, S> ResourceService<R, S>
where
    R: Resource,
    S: Repository<R>,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Full ordered sequence of records, narrowed by the filter. An empty
    /// match is an empty list, never an error.
    pub async fn list(&self, filter: R::Filter) -> RepoResult<Vec<R>> {
        self.store.list(filter).await
    }

    /// Look up one record by id.
    pub async fn get(&self, id: &R::Id) -> RepoResult<Option<R>> {
        self.store.get(id).await
    }

    /// Persist a new record. The store assigns the id; the returned record
    /// carries it.
    pub async fn create(&self, draft: R::Draft) -> RepoResult<R> {
        self.store.create(draft).await
    }

    /// Apply a partial update to an existing record. An unknown id surfaces
    /// as the store's failure, not as a check here.
    pub async fn update(&self, id: &R::Id, patch: R::Patch) -> RepoResult<R> {
        self.store.update(id, patch).await
    }
}
