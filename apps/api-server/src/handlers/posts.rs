//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::Post;
use blog_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/posts
///
/// A JSON `null` body is passed on as a missing post.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<Option<Post>>,
) -> AppResult<HttpResponse> {
    let post = state.posts.add_post(body.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.retrieve_all_posts().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post = state.posts.retrieve_post_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// PUT /api/posts
///
/// The body must carry the stored `createdDate` and `updatedDate`; the server
/// assigns the new `updatedDate`.
pub async fn update_post(
    state: web::Data<AppState>,
    body: web::Json<Option<Post>>,
) -> AppResult<HttpResponse> {
    let post = state.posts.modify_post(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post = state.posts.remove_post_by_id(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(post, "Post removed")))
}
