pub mod auth;
pub mod blogs;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod tokens;

pub use routes::build_router;
pub use state::{AppState, AppStateInner};
