use axum::Router;
use axum::routing::post;

use crate::app::AppState;
use crate::handlers::user::signup_user;

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/signup", post(signup_user))
}
