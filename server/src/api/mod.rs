pub mod recipes;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use recipebox_core::StoreError;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Base path every API route is mounted under.
pub const API_PREFIX: &str = "/api/v1";

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Per-request failure, converted to a status code and an [`ErrorResponse`].
#[derive(Debug)]
pub enum ApiError {
    /// Request body or query string could not be bound to the expected shape.
    Validation(String),
    NotFound,
    Storage(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Storage(message) => ApiError::Storage(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Recipe not found".to_string()),
            ApiError::Storage(message) => {
                tracing::error!("Recipe store failure: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Recipes API",
            description = "Create, list, update, delete and search recipes by tag."
        ),
        components(schemas(ErrorResponse))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![recipes::ApiDoc::openapi()];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let spec = openapi();
        for path in [
            "/api/v1/recipes",
            "/api/v1/recipes/{id}",
            "/api/v1/recipes/search",
        ] {
            assert!(spec.paths.paths.contains_key(path), "missing {}", path);
        }

        let schemas = &spec.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("ErrorResponse"));
        assert!(schemas.contains_key("Recipe"));
        assert!(schemas.contains_key("RecipeInput"));
    }

    #[test]
    fn test_store_error_mapping() {
        assert!(matches!(
            ApiError::from(StoreError::NotFound),
            ApiError::NotFound
        ));

        let response = ApiError::from(StoreError::Storage("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
