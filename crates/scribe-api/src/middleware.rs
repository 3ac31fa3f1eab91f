use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Identity of the caller, inserted into request extensions by `require_auth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub id: i64,
}

/// Verify the `Authorization` header and attach the caller's id to the request.
///
/// The header carries the raw token; a `Bearer ` prefix is accepted too.
/// A missing header is treated as an empty token and fails verification.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header).trim();

    let claims = state.tokens.verify(token).map_err(|e| {
        warn!("Rejected token on {} {}: {}", req.method(), req.uri().path(), e);
        ApiError::NotLoggedIn
    })?;

    req.extensions_mut().insert(AuthUser { id: claims.id });
    Ok(next.run(req).await)
}
