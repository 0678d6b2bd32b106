use argon2::{
    Argon2,
    password_hash::{
        Error as PHCError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{HeaderMap, header, request::Parts};

use crate::app::AppState;
use crate::helpers::{ApiError, to_500, unauthorized};
use crate::models::user::User;

pub fn hash_password(password: &str) -> Result<String, PHCError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)?
        .to_string();
    Ok(hash)
}

pub fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// `sub` carries the username; the access-control extractor resolves it back
/// to a user row on every request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token settings read once at startup and carried in the application state.
#[derive(Clone)]
pub struct AuthConfig {
    pub cookie_name: String,
    pub ttl_secs: i64,
    pub secure_cookies: bool,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthConfig {
    pub fn new(secret: &str, ttl_secs: i64, cookie_name: String, secure_cookies: bool) -> Self {
        Self {
            cookie_name,
            ttl_secs,
            secure_cookies,
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let ttl_secs = std::env::var("JWT_EXP_SECONDS")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(900);
        let cookie_name =
            std::env::var("AUTH_COOKIE_NAME").unwrap_or_else(|_| "access_token".into());
        let secure = std::env::var("PRODUCTION_MODE")
            .ok()
            .is_some_and(|v| v == "true");
        Self::new(&secret, ttl_secs, cookie_name, secure)
    }

    pub fn cookie_for(&self, token: &str) -> String {
        let secure_flag = if self.secure_cookies { "; Secure" } else { "" };
        format!(
            "{}={token}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax{secure_flag}",
            self.cookie_name, self.ttl_secs
        )
    }

    pub fn clear_cookie(&self) -> String {
        let secure_flag = if self.secure_cookies { "; Secure" } else { "" };
        format!(
            "{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax{secure_flag}",
            self.cookie_name
        )
    }
}

pub fn issue_token(cfg: &AuthConfig, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = time::OffsetDateTime::now_utc().unix_timestamp();
    let claims = Claims {
        sub: username.to_string(),
        iat: now,
        exp: now + cfg.ttl_secs,
    };
    encode(&Header::default(), &claims, &cfg.encoding)
}

pub fn verify_token(cfg: &AuthConfig, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let validation = Validation::default();
    let data = decode::<Claims>(token, &cfg.decoding, &validation)?;
    Ok(data.claims)
}

fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;
    for part in cookie_header.split(';') {
        let p = part.trim();
        if let Some(v) = p.strip_prefix(&format!("{name}=")) {
            return Some(v.to_string());
        }
    }
    None
}

fn get_bearer(headers: &HeaderMap) -> Option<String> {
    let v = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    v.strip_prefix("Bearer ").map(|s| s.to_string())
}

/// Gate shared by every protected handler: a valid token AND a live user row,
/// otherwise the handler body never runs. A stale token whose user has been
/// deleted is rejected the same way as a bad token.
pub struct AuthedUser(pub User);

impl<S> FromRequestParts<S> for AuthedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let headers = &parts.headers;
        let token = get_cookie(headers, &state.auth.cookie_name)
            .or_else(|| get_bearer(headers))
            .ok_or_else(|| unauthorized("Missing token"))?;

        let claims = verify_token(&state.auth, &token)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let user = sqlx::query_as::<_, User>(
            r#"SELECT id, username, email, password, created_at FROM users WHERE username = ?"#,
        )
        .bind(&claims.sub)
        .fetch_optional(&state.pool)
        .await
        .map_err(to_500)?
        .ok_or_else(|| unauthorized("Unauthorized access"))?;

        Ok(AuthedUser(user))
    }
}
