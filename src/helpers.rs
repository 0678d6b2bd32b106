use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error half of every handler: a status plus a human-readable message,
/// rendered as a `{"error": ...}` JSON body. No internals leak to clients.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub fn to_500<E: std::fmt::Display>(e: E) -> ApiError {
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}

/// Uniqueness is enforced by the database, not pre-checked; a violation at
/// commit time becomes a 400.
pub fn unique_or_500(e: sqlx::Error) -> ApiError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return ApiError::new(StatusCode::BAD_REQUEST, "Username or email already exists");
        }
    }
    to_500(e)
}

pub fn not_found(msg: impl Into<String>) -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, msg)
}

pub fn unauthorized(msg: impl Into<String>) -> ApiError {
    ApiError::new(StatusCode::UNAUTHORIZED, msg)
}

pub fn ok(msg: impl Into<String>) -> (StatusCode, Json<serde_json::Value>) {
    let message: String = msg.into();
    (StatusCode::OK, Json(json!({ "message": message })))
}

pub fn created(msg: impl Into<String>) -> (StatusCode, Json<serde_json::Value>) {
    let message: String = msg.into();
    (StatusCode::CREATED, Json(json!({ "message": message })))
}
