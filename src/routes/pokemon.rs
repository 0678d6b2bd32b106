use axum::Router;
use axum::routing::get;

use crate::app::AppState;
use crate::handlers::pokemon::{
    get_pokemon, list_my_pokemon, release_pokemon, rename_pokemon, save_pokemon,
};

pub fn pokemon_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/mypokemon",
            get(list_my_pokemon)
                .post(save_pokemon)
                .put(rename_pokemon)
                .delete(release_pokemon),
        )
        .route("/mypokemon/{id}", get(get_pokemon))
}
