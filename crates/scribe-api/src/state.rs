use std::sync::Arc;

use tracing::error;

use scribe_db::Database;

use crate::error::ApiError;
use crate::tokens::TokenService;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub tokens: TokenService,
}

/// Run blocking work (SQLite, password hashing) off the async runtime.
///
/// The closure's own error is returned untouched so each handler can map it to
/// its fixed status; only a failed join becomes `ApiError::Internal`.
pub async fn blocking<F, T>(f: F) -> Result<anyhow::Result<T>, ApiError>
where
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.map_err(|e| {
        error!("spawn_blocking join error: {}", e);
        ApiError::Internal(e.into())
    })
}
