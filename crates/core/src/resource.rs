//! Resource contract: the shape a record type exposes to generic storage.
//!
//! A `Resource` describes one storable record type together with the three
//! payload shapes the CRUD operations exchange: the `Draft` a caller supplies
//! on create, the `Patch` applied on update, and the `Filter` accepted by
//! list. None of the payload shapes carries an id; identity is assigned by
//! the store on create and never changes afterwards.

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// Contract implemented by a storable record type.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Strongly-typed record identifier.
    type Id: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Fields supplied by the caller when creating a record.
    type Draft: Send + 'static;

    /// Partial field set applied by update; absent fields keep their value.
    type Patch: Send + 'static;

    /// Equality filters accepted by list.
    type Filter: ResourceFilter<Self> + Send + 'static;

    /// Returns the record identifier.
    fn id(&self) -> &Self::Id;

    /// Mint a fresh identifier. Called by stores that own identity
    /// assignment (never by transport code).
    fn fresh_id() -> Self::Id;

    /// Build a record from a caller-supplied draft and a store-assigned id.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Apply a partial update in place. The id is not reachable from a
    /// patch, so it survives every update.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Filter predicate for list operations.
///
/// `Default` must produce the match-everything filter.
pub trait ResourceFilter<R: ?Sized>: Default {
    fn matches(&self, record: &R) -> bool;
}
