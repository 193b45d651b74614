//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
///
/// CRUD comes from the generic `BaseRepository` implementation.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    /// `UPDATE posts SET .. WHERE id = $1 AND updated_date = $2`; no affected
    /// rows means another write got there first.
    async fn update_if_unmodified(
        &self,
        post: Post,
        expected_updated_date: DateTime<FixedOffset>,
    ) -> Result<Post, RepoError> {
        let post_id = post.id;
        let active_model: post::ActiveModel = post.clone().into();

        let result = PostEntity::update_many()
            .set(active_model)
            .filter(post::Column::Id.eq(post_id))
            .filter(post::Column::UpdatedDate.eq(expected_updated_date))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            tracing::warn!(post_id = %post_id, "Post changed before the update could land");
            return Err(RepoError::Conflict(format!(
                "post {post_id} no longer matches the version it was read at"
            )));
        }

        Ok(post)
    }
}
