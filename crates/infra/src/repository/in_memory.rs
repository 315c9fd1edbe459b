//! In-memory repository for tests and development.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use rollcall_core::{Resource, ResourceFilter};

use super::{RepoError, RepoResult, Repository};

/// In-memory store backed by an insertion-ordered `Vec`.
///
/// Native order is insertion order, so unfiltered lists replay creation
/// order. Each operation takes the lock once; consistency between
/// operations is the caller's problem, as with any store.
#[derive(Debug)]
pub struct InMemoryStore<R> {
    records: RwLock<Vec<R>>,
}

impl<R> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> RepoError {
    RepoError::operation("store lock poisoned")
}

#[async_trait]
impl<R: Resource> Repository<R> for InMemoryStore<R> {
    async fn list(&self, filter: R::Filter) -> RepoResult<Vec<R>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().filter(|r| filter.matches(r)).cloned().collect())
    }

    async fn get(&self, id: &R::Id) -> RepoResult<Option<R>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn create(&self, draft: R::Draft) -> RepoResult<R> {
        let record = R::from_draft(R::fresh_id(), draft);
        let mut records = self.records.write().map_err(poisoned)?;
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &R::Id, patch: R::Patch) -> RepoResult<R> {
        let mut records = self.records.write().map_err(poisoned)?;
        let record = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| RepoError::operation(format!("record {id} does not exist")))?;
        record.apply_patch(patch);
        Ok(record.clone())
    }
}
