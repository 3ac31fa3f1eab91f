use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::{error, warn};

use scribe_types::api::{
    BlogIdResponse, BlogResponse, BlogsResponse, CreateBlogRequest, UpdateBlogRequest,
};
use scribe_types::models::Blog;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::{AppState, blocking};

/// POST /api/v1/blog: the author is always the authenticated caller.
pub async fn create_blog(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateBlogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let blog = blocking(move || db.db.create_blog(&req.title, &req.content, user.id))
        .await??;

    Ok(Json(BlogIdResponse { id: blog.id }))
}

/// PUT /api/v1/blog: selects the row by the `id` in the body.
pub async fn update_blog(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
    Json(req): Json<UpdateBlogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = req.id.ok_or_else(|| {
        warn!("Blog update without an id in the body");
        ApiError::BlogUpdateFailed
    })?;
    apply_update(state, id, req).await
}

/// PUT /api/v1/blog/{id}: selects the row by the path; a body `id` is ignored.
pub async fn update_blog_by_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(_user): Extension<AuthUser>,
    Json(req): Json<UpdateBlogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_blog_id(&id).ok_or(ApiError::BlogUpdateFailed)?;
    apply_update(state, id, req).await
}

async fn apply_update(
    state: AppState,
    id: i64,
    req: UpdateBlogRequest,
) -> Result<Json<BlogIdResponse>, ApiError> {
    let db = state.clone();
    let updated = blocking(move || db.db.update_blog(id, &req.title, &req.content))
        .await?
        .map_err(|e| {
            error!("Blog update failed: {:#}", e);
            ApiError::BlogUpdateFailed
        })?
        .ok_or_else(|| {
            warn!("Blog {} not found for update", id);
            ApiError::BlogUpdateFailed
        })?;

    Ok(Json(BlogIdResponse { id: updated.id }))
}

/// GET /api/v1/blog/{id}: `{"blog": null}` when the id is unknown.
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Extension(_user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_blog_id(&id).ok_or(ApiError::BlogFetchFailed)?;

    let db = state.clone();
    let blog = blocking(move || db.db.find_blog(id))
        .await?
        .map_err(|e| {
            error!("Blog fetch failed: {:#}", e);
            ApiError::BlogFetchFailed
        })?;

    Ok(Json(BlogResponse {
        blog: blog.map(Blog::from),
    }))
}

/// GET /api/v1/blog/bulk: the whole collection, unpaginated.
pub async fn list_blogs(
    State(state): State<AppState>,
    Extension(_user): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let rows = blocking(move || db.db.list_blogs()).await??;

    Ok(Json(BlogsResponse {
        blogs: rows.into_iter().map(Blog::from).collect(),
    }))
}

fn parse_blog_id(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(id) => Some(id),
        Err(e) => {
            warn!("Invalid blog id '{}': {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_ids_must_be_integers() {
        assert_eq!(parse_blog_id("12"), Some(12));
        assert_eq!(parse_blog_id("abc"), None);
        assert_eq!(parse_blog_id("1.5"), None);
    }
}
