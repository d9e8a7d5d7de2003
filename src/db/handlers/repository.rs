//! Base repository trait for database operations.

use crate::db::errors::Result;

/// Base repository trait providing common database operations.
///
/// A repository is the data access layer for one collection. It provides
/// methods for creating, reading, replacing, and deleting records.
///
/// This trait has separate associated types for create requests, update
/// requests, and responses.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating records
    type CreateRequest: Send + Sync;

    /// The request type for replacing records
    type UpdateRequest: Send + Sync;

    /// The record type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new record; the store assigns the identifier
    async fn create(&self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get a record by ID; absence is `None`, not an error
    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List every record in the collection
    async fn list(&self) -> Result<Vec<Self::Response>>;

    /// Replace the full record matching `id`; no-op when absent
    async fn update(&self, id: Self::Id, request: &Self::UpdateRequest) -> Result<()>;

    /// Delete a record by ID, returning whether anything was removed
    async fn delete(&self, id: Self::Id) -> Result<bool>;
}
