use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use scribe_types::api::MessageResponse;

/// Every failure a handler can report. Each variant renders a fixed status and
/// body; underlying causes are logged and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("You are not logged in")]
    NotLoggedIn,

    #[error("User already exists")]
    SignupFailed,

    #[error("Invalid (User does not exist !!!)")]
    InvalidCredentials,

    #[error("Error while signing in")]
    SigninFailed,

    #[error("Error while fetching blog post")]
    BlogFetchFailed,

    #[error("Error while updating blog post")]
    BlogUpdateFailed,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotLoggedIn | ApiError::InvalidCredentials | ApiError::SigninFailed => {
                StatusCode::FORBIDDEN
            }
            ApiError::SignupFailed | ApiError::BlogFetchFailed | ApiError::BlogUpdateFailed => {
                StatusCode::LENGTH_REQUIRED
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Blog domain answers with a JSON message
            ApiError::NotLoggedIn | ApiError::BlogFetchFailed | ApiError::BlogUpdateFailed => (
                status,
                Json(MessageResponse {
                    message: self.to_string(),
                }),
            )
                .into_response(),
            ApiError::Internal(e) => {
                error!("Internal error: {:#}", e);
                (status, "Internal server error").into_response()
            }
            // User domain answers with plain text
            ApiError::SignupFailed | ApiError::InvalidCredentials | ApiError::SigninFailed => {
                (status, self.to_string()).into_response()
            }
        }
    }
}
