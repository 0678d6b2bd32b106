use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{info, warn};

use crate::models::pokemon::Pokemon;

async fn connect_to_db(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let db_pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(db_pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("🔄 running migrations...");
    sqlx::migrate!("./migrations").run(pool).await
}

/// Loads the read-only catalog when the table is empty. The HTTP surface
/// never writes this table; this is the only in-process writer.
pub async fn seed_catalog(
    pool: &SqlitePool,
    json_path: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pokemon")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let data = std::fs::read_to_string(json_path)?;
    let entries: Vec<Pokemon> = serde_json::from_str(&data)?;

    info!("🌱 {json_path}: inserting {} pokemon...", entries.len());
    for p in &entries {
        sqlx::query(
            r#"
            INSERT INTO pokemon (
                id, name, attack, defense, hp, height, weight,
                sp_attack, sp_defense, speed, type1, type2
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET
              name = EXCLUDED.name,
              attack = EXCLUDED.attack,
              defense = EXCLUDED.defense,
              hp = EXCLUDED.hp,
              height = EXCLUDED.height,
              weight = EXCLUDED.weight,
              sp_attack = EXCLUDED.sp_attack,
              sp_defense = EXCLUDED.sp_defense,
              speed = EXCLUDED.speed,
              type1 = EXCLUDED.type1,
              type2 = EXCLUDED.type2
            "#,
        )
        .bind(p.id)
        .bind(&p.name)
        .bind(p.attack)
        .bind(p.defense)
        .bind(p.hp)
        .bind(p.height)
        .bind(p.weight)
        .bind(p.sp_attack)
        .bind(p.sp_defense)
        .bind(p.speed)
        .bind(&p.type1)
        .bind(p.type2.as_deref())
        .execute(pool)
        .await?;
    }

    info!("🌱 seed done");
    Ok(())
}

pub async fn init_db(url: &str) -> SqlitePool {
    let pool = connect_to_db(url)
        .await
        .unwrap_or_else(|e| panic!("DB connection failed: {e}"));
    if let Err(e) = run_migrations(&pool).await {
        warn!("⚠️ migration error: {e}");
    }
    if let Err(e) = seed_catalog(&pool, "data/gen1.json").await {
        warn!("🌱 seed skipped: {e}");
    }
    pool
}
