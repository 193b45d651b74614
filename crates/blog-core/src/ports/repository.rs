use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Insert a new entity. Fails with `RepoError::Constraint` if it already exists.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Every stored entity.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Replace a stored entity. Fails with `RepoError::NotFound` if it is gone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Replace a stored post only while its updated date is still
    /// `expected_updated_date`.
    ///
    /// The version check and the write happen as one step. Fails with
    /// `RepoError::Conflict` when the stored post has moved on or is gone.
    async fn update_if_unmodified(
        &self,
        post: Post,
        expected_updated_date: DateTime<FixedOffset>,
    ) -> Result<Post, RepoError>;
}
