use crate::api::{ApiError, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use recipebox_core::{Recipe, RecipeInput};

/// Replaces every content field of the recipe; there is no partial update.
#[utoipa::path(
    put,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    request_body = RecipeInput,
    responses(
        (status = 200, description = "Recipe updated successfully", body = Recipe),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    // Body is validated before the lookup, so a bad body on a missing id is a 400.
    let Json(input) = payload?;

    let recipe = store.update(&id, input).await?;
    tracing::info!(id = %recipe.id, "Recipe updated");

    Ok(Json(recipe))
}
