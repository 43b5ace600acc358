pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod update;


use crate::AppState;
use axum::routing::{get, put};
use axum::Router;
use recipebox_core::{Recipe, RecipeInput};
use utoipa::OpenApi;

/// Returns the router for recipe endpoints (mounted at /api/v1/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes).post(create::create_recipe))
        .route("/search", get(search::search_recipes))
        .route(
            "/{id}",
            put(update::update_recipe).delete(delete::delete_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_recipes,
        update::update_recipe,
        delete::delete_recipe,
        search::search_recipes,
    ),
    components(schemas(Recipe, RecipeInput, delete::DeleteRecipeResponse))
)]
pub struct ApiDoc;
