use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use super::entity::post;
use super::postgres_repo::PostgresPostRepository;

fn post_model(id: Uuid) -> post::Model {
    let now = chrono::Utc::now().fixed_offset();
    post::Model {
        id,
        title: "Test Post".to_owned(),
        sub_title: "Subtitle".to_owned(),
        content: "Content".to_owned(),
        author: "Author".to_owned(),
        created_date: now,
        updated_date: now,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.sub_title, "Subtitle");
    assert_eq!(post.id, post_id);
}

#[tokio::test]
async fn test_find_all_posts() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model(Uuid::new_v4()),
            post_model(Uuid::new_v4()),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts: Vec<Post> = repo.find_all().await.unwrap();
    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn test_insert_returns_stored_post() {
    let model = post_model(Uuid::new_v4());
    let post: Post = model.clone().into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.insert(post.clone()).await.unwrap(), post);
}

#[tokio::test]
async fn test_update_of_missing_row_is_not_found() {
    let post: Post = post_model(Uuid::new_v4()).into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(matches!(repo.update(post).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_delete_without_affected_rows_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<Post, Uuid>::delete(&repo, Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_update_if_unmodified_writes_matching_version() {
    let post: Post = post_model(Uuid::new_v4()).into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let updated = repo
        .update_if_unmodified(post.clone(), post.updated_date)
        .await
        .unwrap();
    assert_eq!(updated, post);
}

#[tokio::test]
async fn test_update_if_unmodified_without_affected_rows_is_conflict() {
    let post: Post = post_model(Uuid::new_v4()).into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo
        .update_if_unmodified(post.clone(), post.updated_date)
        .await;
    assert!(matches!(result, Err(RepoError::Conflict(_))));
}
