use crate::{auth::verify_jwt, error::AppError, state::AppState};
use axum::{
    async_trait,
    body::Body,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

fn bearer_token(value: Option<&header::HeaderValue>) -> Option<&str> {
    value
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Router-level guard for fully protected route groups. Verifies the bearer
/// token and stashes the caller's id in request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers().get(header::AUTHORIZATION))
        .ok_or(AppError::Unauthorized("Missing credentials".to_string()))?;

    let claims = verify_jwt(token, &state.config.jwt_secret)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}

/// The authenticated caller. Reads the id stashed by `auth_middleware`, or
/// verifies the bearer token itself on routes that mix public and protected
/// handlers (item create/delete) and therefore carry no router guard.
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user_id) = parts.extensions.get::<Uuid>() {
            return Ok(AuthUser(*user_id));
        }

        let token = bearer_token(parts.headers.get(header::AUTHORIZATION))
            .ok_or(AppError::Unauthorized("Missing credentials".to_string()))?;

        let claims = verify_jwt(token, &state.config.jwt_secret)?;

        Uuid::parse_str(&claims.sub)
            .map(AuthUser)
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
    }
}
