//! Persistence access for the contacts collection.
//!
//! [`ContactStore`] is the seam between the HTTP layer and the backend: the
//! router is generic over it, handlers call it, and implementations own the
//! canonical records. Two implementations ship: [`MongoStore`] over a single
//! pooled MongoDB client, and [`MemoryStore`] with identical observable
//! semantics for tests and local development.
//!
//! Every write path validates through [`crate::schema`] before touching the
//! backend, so a persisted contact always satisfies the collection rules.

pub mod errors;
pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::schema::{Contact, ContactInput};

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Collection-level operations on contact records.
///
/// Implementations must be safe for concurrent use; the server shares one
/// instance across all in-flight requests.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// All records in backend order. Empty when the collection is empty.
    async fn list(&self) -> StoreResult<Vec<Contact>>;

    /// The record with the given id, or [`StoreError::NotFound`].
    ///
    /// A malformed id is indistinguishable from an absent one: both map to
    /// `NotFound`.
    async fn find(&self, id: &str) -> StoreResult<Contact>;

    /// Validate and persist a new record, returning it with its assigned id.
    async fn insert(&self, input: ContactInput) -> StoreResult<Contact>;

    /// Merge the patch over the stored record, re-validate every rule on
    /// the merged document, and persist the replacement.
    async fn update(&self, id: &str, patch: ContactInput) -> StoreResult<Contact>;

    /// Remove the record, or [`StoreError::NotFound`] if absent.
    async fn delete(&self, id: &str) -> StoreResult<()>;
}
