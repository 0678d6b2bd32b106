use axum::Router;
use axum::routing::{get, post};

use crate::app::AppState;
use crate::handlers::auth::{login_user, logout_user};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/logout", get(logout_user))
}
