use crate::api::{ApiError, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use recipebox_core::Recipe;
use utoipa::IntoParams;

/// Documents the query string. The handler reads raw pairs so that a
/// repeated `tag` uses its first value instead of failing to bind.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Exact, case-sensitive tag to match. Missing is treated as empty.
    pub tag: Option<String>,
}

impl SearchParams {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let tag = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "tag").then_some(value));
        Self { tag }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/recipes/search",
    tag = "recipes",
    params(SearchParams),
    responses(
        (status = 200, description = "Recipes carrying the tag", body = Vec<Recipe>),
        (status = 404, description = "No recipe carries the tag", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn search_recipes(
    State(store): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let Query(pairs) = query?;
    let params = SearchParams::from_pairs(pairs);
    let tag = params.tag.unwrap_or_default();

    // An empty or unknown tag is simply "no matches", not a bad request.
    let matches = store.find_by_tag(&tag).await?;
    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(matches))
}
