use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use uuid::Uuid;

use poke_api_backend::app::{AppState, build_routes};
use poke_api_backend::auth::{AuthConfig, hash_password};
use poke_api_backend::db::run_migrations;

/// Fresh in-memory database per call: migrated, catalog seeded, nothing
/// shared between tests. A single pinned connection keeps the `:memory:`
/// store alive for the whole test.
pub async fn test_state() -> AppState {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("DB connect failed");
    run_migrations(&pool).await.expect("Migration failed");
    seed_catalog(&pool).await;

    AppState {
        pool,
        auth: AuthConfig::new("test-secret", 900, "access_token".into(), false),
    }
}

async fn seed_catalog(pool: &SqlitePool) {
    for (id, name, type1) in [
        (1, "Bulbasaur", "Grass"),
        (4, "Charmander", "Fire"),
        (25, "Pikachu", "Electric"),
    ] {
        sqlx::query(
            r#"
            INSERT INTO pokemon (id, name, attack, defense, hp, sp_attack, sp_defense, speed, type1)
            VALUES (?, ?, 50, 50, 50, 50, 50, 50, ?)
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(type1)
        .execute(pool)
        .await
        .expect("catalog seed failed");
    }
}

#[allow(dead_code)]
pub async fn start_server(state: AppState) -> (String, tokio::task::JoinHandle<()>) {
    let app = build_routes().with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("serve error: {e}");
        }
    });

    (format!("http://{addr}"), handle)
}

#[allow(dead_code)]
pub async fn create_test_user(state: &AppState, prefix: &str) -> (Uuid, String, String, String) {
    let username = format!("{prefix}_{}", Uuid::new_v4().simple());
    let email = format!("{username}@example.com");
    let password = "Password123!".to_string();

    let id = Uuid::new_v4();
    let hash = hash_password(&password).expect("hash_password failed");
    sqlx::query(r#"INSERT INTO users (id, username, email, password) VALUES (?, ?, ?, ?)"#)
        .bind(id)
        .bind(&username)
        .bind(&email)
        .bind(hash)
        .execute(&state.pool)
        .await
        .expect("insert user failed");

    (id, username, email, password)
}

#[allow(dead_code)]
pub fn cookie_header(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("; ")
}
