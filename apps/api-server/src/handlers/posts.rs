//! Post and feed handlers.

use actix_web::{HttpResponse, web};

use chirp_shared::dto::NewPostRequest;

use crate::handlers::{PageQuery, post_page_response, post_response};
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/feed - the viewer's home timeline.
pub async fn feed(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let (page, per_page) = query.clamped();

    let posts = state
        .feed
        .home_timeline(identity.user_id, page, per_page)
        .await?;
    state.accounts.touch_last_seen(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(post_page_response(posts)))
}

/// GET /api/posts/explore - all posts, newest first.
pub async fn explore(
    state: web::Data<AppState>,
    _identity: Identity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let (page, per_page) = query.clamped();

    let posts = state.feed.explore(page, per_page).await?;

    Ok(HttpResponse::Ok().json(post_page_response(posts)))
}

/// POST /api/posts - create a post.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<NewPostRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .feed
        .create_post(identity.user_id, &body.into_inner().body)
        .await?;

    Ok(HttpResponse::Created().json(post_response(post)))
}
