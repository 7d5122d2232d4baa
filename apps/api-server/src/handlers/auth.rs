//! Authentication handlers.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use chirp_core::DomainError;
use chirp_core::ports::TokenService;
use chirp_shared::dto::{AuthResponse, LoginRequest, RegisterRequest};

use crate::handlers::user_response;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let user = state
        .accounts
        .register(&req.username, &req.email, &req.password)
        .await?;

    let token = token_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Created().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // The service distinguishes unknown-username from wrong-password;
    // both collapse to a generic 401 here so login cannot be used to
    // enumerate usernames.
    let user = state
        .accounts
        .authenticate(&req.username, &req.password)
        .await
        .map_err(|e| match e {
            DomainError::UnknownUsername(_) | DomainError::BadCredential => AppError::Unauthorized,
            other => other.into(),
        })?;

    state.accounts.touch_last_seen(user.id).await?;

    let token = token_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: token_service.expiration_seconds() as u64,
    }))
}

/// GET /api/auth/me - Protected route
pub async fn me(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state.accounts.get(identity.user_id).await?;
    state.accounts.touch_last_seen(user.id).await?;

    Ok(HttpResponse::Ok().json(user_response(user)))
}
