use std::sync::LazyLock;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use rand_core::OsRng;
use tracing::{info, warn};

use scribe_types::api::{SigninRequest, SignupRequest};

use crate::error::ApiError;
use crate::state::{AppState, blocking};

/// POST /api/v1/user/signup: create the account and answer with a token as
/// plain text.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|e| {
        warn!("Rejected signup body: {}", e);
        ApiError::SignupFailed
    })?;
    let db = state.clone();
    let SignupRequest {
        username,
        password,
        name,
    } = req;

    let user = blocking(move || {
        let password_hash = hash_password(&password)?;
        db.db.create_user(&username, &password_hash, name.as_deref())
    })
    .await?
    .map_err(|e| {
        warn!("Signup failed: {:#}", e);
        ApiError::SignupFailed
    })?;

    let token = state.tokens.sign(user.id)?;
    info!("User {} signed up as '{}'", user.id, user.username);
    Ok(token)
}

/// POST /api/v1/user/signin: check credentials and answer with a token as
/// plain text.
pub async fn signin(
    State(state): State<AppState>,
    body: Result<Json<SigninRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|e| {
        warn!("Rejected signin body: {}", e);
        ApiError::InvalidCredentials
    })?;
    let db = state.clone();
    let SigninRequest { username, password } = req;

    let user = blocking(move || {
        let Some(user) = db.db.find_user_by_username(&username)? else {
            // Same Argon2 cost as a real check so unknown usernames take as long
            verify_password(&password, DUMMY_HASH.as_str());
            return Ok(None);
        };
        Ok(verify_password(&password, &user.password).then_some(user))
    })
    .await?
    .map_err(|e| {
        warn!("Signin lookup failed: {:#}", e);
        ApiError::SigninFailed
    })?
    .ok_or(ApiError::InvalidCredentials)?;

    let token = state.tokens.sign(user.id)?;
    Ok(token)
}

/// Hash of a random throwaway password, checked against when the username is
/// unknown. Empty if hashing failed at startup, which only skips the work.
static DUMMY_HASH: LazyLock<String> = LazyLock::new(|| {
    let throwaway = SaltString::generate(&mut OsRng);
    hash_password(throwaway.as_str()).unwrap_or_default()
});

/// Argon2id with a fresh random salt, encoded as a PHC string.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Password hashing failed: {}", e))?
        .to_string();
    Ok(hash)
}

/// `false` for a wrong password and for a stored value that is not a PHC hash.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        warn!("Stored password is not a valid hash");
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}
