use crate::api::{ApiError, ErrorResponse};
use crate::AppState;
use axum::{extract::State, Json};
use recipebox_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/v1/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, oldest first", body = Vec<Recipe>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(store): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(store.list().await?))
}
