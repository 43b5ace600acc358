use crate::api::{ApiError, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use recipebox_core::{Recipe, RecipeInput};

#[utoipa::path(
    post,
    path = "/api/v1/recipes",
    tag = "recipes",
    request_body = RecipeInput,
    responses(
        (status = 201, description = "Recipe created successfully", body = Recipe),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;

    let recipe = store.create(input).await?;
    tracing::info!(id = %recipe.id, "Recipe created");

    Ok((StatusCode::CREATED, Json(recipe)))
}
