use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::require_auth;
use crate::state::AppState;
use crate::{auth, blogs};

pub const USER_PREFIX: &str = "/api/v1/user";
pub const BLOG_PREFIX: &str = "/api/v1/blog";

/// The full HTTP surface. Registering the same method and path twice panics
/// here, so a duplicate route cannot make it past startup.
pub fn build_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin));

    // Every blog route, reads included, sits behind the token check.
    // The static `/bulk` segment wins over `/{id}`.
    let blog_routes = Router::new()
        .route("/", post(blogs::create_blog).put(blogs::update_blog))
        .route("/bulk", get(blogs::list_blogs))
        .route("/{id}", get(blogs::get_blog).put(blogs::update_blog_by_path))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health))
        .nest(USER_PREFIX, user_routes)
        .nest(BLOG_PREFIX, blog_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
