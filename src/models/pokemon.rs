use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog row: read-only reference data describing a species. Seeded
/// out-of-band, never written through the API.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub hp: i32,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub sp_attack: i32,
    pub sp_defense: i32,
    pub speed: i32,
    pub type1: String,
    pub type2: Option<String>,
}

/// One captured instance: several rows may point at the same catalog id,
/// for the same or different owners. `name` is the user-assigned nickname.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct UserPokemon {
    pub id: i64,
    pub user_id: Uuid,
    pub pokemon_id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SavePokemonPayload {
    pub pokemon_id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenamePokemonPayload {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ReleasePokemonPayload {
    pub id: i64,
}
