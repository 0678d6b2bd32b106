use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::app::AppState;
use crate::auth::hash_password;
use crate::helpers::{ApiError, ApiResult, unique_or_500};
use crate::models::user::CreateUser;

pub async fn signup_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUser>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let hashed = hash_password(&payload.password)
        .map_err(|_| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Hash failed"))?;

    let id = Uuid::new_v4();
    sqlx::query(r#"INSERT INTO users (id, username, email, password) VALUES (?, ?, ?, ?)"#)
        .bind(id)
        .bind(&payload.username)
        .bind(&payload.email)
        .bind(hashed)
        .execute(&state.pool)
        .await
        .map_err(unique_or_500)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("User {id} - {} created!", payload.username),
            "id": id,
            "username": payload.username,
        })),
    ))
}
