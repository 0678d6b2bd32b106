use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::app::AppState;
use crate::auth::{issue_token, verify_password};
use crate::helpers::{ApiResult, ok, to_500, unauthorized};
use crate::models::user::{LoginUser, User};

pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginUser>,
) -> ApiResult<Response> {
    let user = sqlx::query_as::<_, User>(
        r#"SELECT id, username, email, password, created_at FROM users WHERE username = ?"#,
    )
    .bind(&payload.username)
    .fetch_optional(&state.pool)
    .await
    .map_err(to_500)?;

    // Same answer whether the username is unknown or the password is wrong.
    let Some(user) = user else {
        return Err(unauthorized("Invalid username or password"));
    };
    if !verify_password(&user.password, &payload.password) {
        return Err(unauthorized("Invalid username or password"));
    }

    let token = issue_token(&state.auth, &user.username).map_err(to_500)?;
    let cookie = state.auth.cookie_for(&token);

    let mut res = (StatusCode::OK, Json(json!({ "access_token": token }))).into_response();
    res.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie).map_err(to_500)?,
    );
    Ok(res)
}

pub async fn logout_user(State(state): State<AppState>) -> ApiResult<Response> {
    let mut res = ok("Logged out").into_response();
    res.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_str(&state.auth.clear_cookie()).map_err(to_500)?,
    );
    Ok(res)
}
