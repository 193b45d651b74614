//! Post service - CRUD over the post repository, guarded by [`PostValidator`].

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Post;
use crate::error::{PostServiceError, PostValidationError, RepoError};
use crate::ports::{BaseRepository, Clock, PostRepository};

use super::validations::PostValidator;

/// Post service.
///
/// Validation failures never reach storage. Every failure is logged once here
/// before it is handed back to the caller.
#[derive(Clone)]
pub struct PostService {
    repository: Arc<dyn PostRepository>,
    clock: Arc<dyn Clock>,
    validator: PostValidator,
}

impl PostService {
    pub fn new(repository: Arc<dyn PostRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            validator: PostValidator::new(clock.clone()),
            clock,
        }
    }

    pub async fn add_post(&self, post: Option<Post>) -> Result<Post, PostServiceError> {
        let post = PostValidator::ensure_present(post.as_ref()).map_err(validation_failure)?;

        self.validator
            .validate_on_add(Some(post))
            .map_err(validation_failure)?;

        tracing::debug!(post_id = %post.id, "Inserting post");

        self.repository
            .insert(post.clone())
            .await
            .map_err(dependency_failure)
    }

    pub async fn retrieve_all_posts(&self) -> Result<Vec<Post>, PostServiceError> {
        self.repository.find_all().await.map_err(dependency_failure)
    }

    pub async fn retrieve_post_by_id(&self, post_id: Uuid) -> Result<Post, PostServiceError> {
        self.find_stored(post_id).await
    }

    /// Update a stored post.
    ///
    /// The incoming post must carry the stored creation and updated dates. The
    /// storage comparison runs first, then the post is stamped with a new
    /// updated date from the clock and checked as a modification. The write
    /// only lands while storage still holds the version that was compared, so
    /// of two concurrent updates from the same version one gets a conflict.
    pub async fn modify_post(&self, post: Option<Post>) -> Result<Post, PostServiceError> {
        let mut post = PostValidator::ensure_present(post.as_ref())
            .map_err(validation_failure)?
            .clone();

        let storage_post = self.find_stored(post.id).await?;

        self.validator
            .validate_against_storage_on_modify(&post, &storage_post)
            .map_err(validation_failure)?;

        post.updated_date = self.clock.now();

        self.validator
            .validate_on_modify(Some(&post))
            .map_err(validation_failure)?;

        tracing::debug!(post_id = %post.id, "Updating post");

        self.repository
            .update_if_unmodified(post, storage_post.updated_date)
            .await
            .map_err(dependency_failure)
    }

    pub async fn remove_post_by_id(&self, post_id: Uuid) -> Result<Post, PostServiceError> {
        let storage_post = self.find_stored(post_id).await?;

        tracing::debug!(post_id = %post_id, "Deleting post");
        self.repository
            .delete(post_id)
            .await
            .map_err(dependency_failure)?;

        Ok(storage_post)
    }

    async fn find_stored(&self, post_id: Uuid) -> Result<Post, PostServiceError> {
        self.validator
            .validate_identifier(post_id)
            .map_err(validation_failure)?;

        let maybe_post = self
            .repository
            .find_by_id(post_id)
            .await
            .map_err(dependency_failure)?;

        self.validator
            .validate_stored_entity(maybe_post, post_id)
            .map_err(validation_failure)
    }
}

fn validation_failure(error: PostValidationError) -> PostServiceError {
    tracing::error!(error = %error, "Post validation failed");
    PostServiceError::Validation(error)
}

fn dependency_failure(error: RepoError) -> PostServiceError {
    match error {
        RepoError::Connection(_) => {
            tracing::error!(error = %error, critical = true, "Post storage unavailable");
            PostServiceError::CriticalDependency(error)
        }
        RepoError::Constraint(_) | RepoError::NotFound | RepoError::Conflict(_) => {
            tracing::error!(error = %error, "Post storage rejected the request");
            PostServiceError::DependencyValidation(error)
        }
        RepoError::Query(_) => {
            tracing::error!(error = %error, "Post storage query failed");
            PostServiceError::Dependency(error)
        }
    }
}
