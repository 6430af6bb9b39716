//! Auth endpoints: login, refresh, logout.
//!
//! Every failure (unknown user, bad signature, wrong token type, expired
//! token) collapses to the same generic 401 so the response never reveals
//! which check failed.

use api_types::auth::{LoginRequest, LogoutResponse, RefreshRequest, TokenResponse};
use axum::{Json, extract::State};
use chrono::Utc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::server::ServerState;
use crate::tokens::{ACCESS_TOKEN_TTL_SECS, TokenKind, TokenSigner};
use crate::{ServerError, users};

fn token_response(signer: &TokenSigner, sub: i64, username: &str) -> TokenResponse {
    let pair = signer.issue_pair(sub, username, Utc::now());
    TokenResponse {
        access_token: pair.access,
        refresh_token: pair.refresh,
        token_type: "Bearer".to_string(),
        expires_in: ACCESS_TOKEN_TTL_SECS,
    }
}

pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ServerError> {
    let user = users::Entity::find()
        .filter(users::Column::Username.eq(payload.username.as_str()))
        .one(&state.db)
        .await?
        .ok_or(ServerError::Auth)?;

    Ok(Json(token_response(&state.tokens, user.id, &user.username)))
}

pub async fn refresh(
    State(state): State<ServerState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, ServerError> {
    let claims = state
        .tokens
        .verify(&payload.refresh_token, TokenKind::Refresh, Utc::now())
        .map_err(|_| ServerError::Auth)?;

    // Re-resolve the user; a token must not outlive its subject.
    let user = users::Entity::find_by_id(claims.sub)
        .one(&state.db)
        .await?
        .ok_or(ServerError::Auth)?;
    if user.username != claims.username {
        return Err(ServerError::Auth);
    }

    Ok(Json(token_response(&state.tokens, user.id, &user.username)))
}

/// No server-side session state exists, so logout only acknowledges.
pub async fn logout() -> Json<LogoutResponse> {
    Json(LogoutResponse { success: true })
}
