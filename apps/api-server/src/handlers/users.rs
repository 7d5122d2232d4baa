//! Profile and follow-graph handlers.

use actix_web::{HttpResponse, web};

use chirp_shared::dto::{EditProfileRequest, ProfileResponse};

use crate::handlers::{PageQuery, post_page_response, user_response};
use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/users/{username} - profile with the user's posts page.
pub async fn profile(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let username = path.into_inner();
    let (page, per_page) = query.clamped();

    let user = state.accounts.get_by_username(&username).await?;
    let posts = state.feed.user_posts(user.id, page, per_page).await?;
    let follower_count = state.social.follower_count(user.id).await?;
    let following_count = state.social.following_count(user.id).await?;
    let followed_by_viewer = state.social.is_following(identity.user_id, user.id).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        user: user_response(user),
        follower_count,
        following_count,
        followed_by_viewer,
        posts: post_page_response(posts),
    }))
}

/// PUT /api/users/me - edit the current user's profile.
pub async fn update_me(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<EditProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .accounts
        .update_profile(identity.user_id, &req.username, req.about_me.as_deref())
        .await?;

    Ok(HttpResponse::Ok().json(user_response(user)))
}

/// POST /api/users/{username}/follow
pub async fn follow(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let target = state.accounts.get_by_username(&path.into_inner()).await?;
    state.social.follow(identity.user_id, target.id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/users/{username}/follow
pub async fn unfollow(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let target = state.accounts.get_by_username(&path.into_inner()).await?;
    state.social.unfollow(identity.user_id, target.id).await?;

    Ok(HttpResponse::NoContent().finish())
}
