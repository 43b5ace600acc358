use crate::api::{ApiError, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteRecipeResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/api/v1/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = String, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe deleted successfully", body = DeleteRecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(store): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteRecipeResponse>, ApiError> {
    store.delete(&id).await?;
    tracing::info!(id = %id, "Recipe deleted");

    Ok(Json(DeleteRecipeResponse {
        message: "Recipe deleted".to_string(),
    }))
}
