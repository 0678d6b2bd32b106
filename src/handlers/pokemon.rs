use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::app::AppState;
use crate::auth::AuthedUser;
use crate::helpers::{ApiResult, created, not_found, ok, to_500, unauthorized};
use crate::models::pokemon::{
    Pokemon, ReleasePokemonPayload, RenamePokemonPayload, SavePokemonPayload, UserPokemon,
};

pub async fn save_pokemon(
    AuthedUser(user): AuthedUser,
    State(state): State<AppState>,
    Json(payload): Json<SavePokemonPayload>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let species = sqlx::query_as::<_, Pokemon>(
        r#"
        SELECT id, name, attack, defense, hp, height, weight,
               sp_attack, sp_defense, speed, type1, type2
        FROM pokemon
        WHERE id = ?
        "#,
    )
    .bind(payload.pokemon_id)
    .fetch_optional(&state.pool)
    .await
    .map_err(to_500)?
    .ok_or_else(|| not_found("Pokemon not found"))?;

    sqlx::query(r#"INSERT INTO user_pokemon (user_id, pokemon_id, name) VALUES (?, ?, ?)"#)
        .bind(user.id)
        .bind(species.id)
        .bind(&payload.name)
        .execute(&state.pool)
        .await
        .map_err(to_500)?;

    Ok(created(format!("{} saved!", species.name)))
}

pub async fn list_my_pokemon(
    AuthedUser(user): AuthedUser,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserPokemon>>> {
    let rows = sqlx::query_as::<_, UserPokemon>(
        r#"
        SELECT id, user_id, pokemon_id, name
        FROM user_pokemon
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user.id)
    .fetch_all(&state.pool)
    .await
    .map_err(to_500)?;

    Ok(Json(rows))
}

// Ownership lives in the query predicate (id AND user_id): a row someone else
// owns answers exactly like a row that does not exist.
pub async fn get_pokemon(
    AuthedUser(user): AuthedUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserPokemon>> {
    let row = sqlx::query_as::<_, UserPokemon>(
        r#"
        SELECT id, user_id, pokemon_id, name
        FROM user_pokemon
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(id)
    .bind(user.id)
    .fetch_optional(&state.pool)
    .await
    .map_err(to_500)?;

    let Some(row) = row else {
        return Err(unauthorized("Pokemon not found or unauthorized"));
    };

    Ok(Json(row))
}

pub async fn rename_pokemon(
    AuthedUser(user): AuthedUser,
    State(state): State<AppState>,
    Json(payload): Json<RenamePokemonPayload>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let res = sqlx::query(r#"UPDATE user_pokemon SET name = ? WHERE id = ? AND user_id = ?"#)
        .bind(&payload.name)
        .bind(payload.id)
        .bind(user.id)
        .execute(&state.pool)
        .await
        .map_err(to_500)?;

    if res.rows_affected() == 0 {
        return Err(unauthorized("Bad ID or unauthorized"));
    }

    Ok(ok(format!("Pokemon updated to '{}'!", payload.name)))
}

pub async fn release_pokemon(
    AuthedUser(user): AuthedUser,
    State(state): State<AppState>,
    Json(payload): Json<ReleasePokemonPayload>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let res = sqlx::query(r#"DELETE FROM user_pokemon WHERE id = ? AND user_id = ?"#)
        .bind(payload.id)
        .bind(user.id)
        .execute(&state.pool)
        .await
        .map_err(to_500)?;

    if res.rows_affected() == 0 {
        return Err(unauthorized("Bad ID or unauthorized"));
    }

    Ok(ok("Pokemon released!"))
}
