use axum::response::Html;
use axum::{Router, routing::get};
use sqlx::SqlitePool;

use crate::auth::AuthConfig;
use crate::routes;

/// Everything handlers need, constructed once in `main` (or per test) and
/// injected through the router state.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: AuthConfig,
}

pub fn build_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Html("<h1>Poke API v1.0</h1>") }))
        .merge(routes::auth::auth_routes())
        .merge(routes::user::user_routes())
        .merge(routes::pokemon::pokemon_routes())
}
