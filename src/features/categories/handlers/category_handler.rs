use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoriesResponseDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List all categories
///
/// Returns a mapping of category id to category name. Responds `404` when no
/// categories exist.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category mapping", body = ApiResponse<CategoriesResponseDto>),
        (status = 404, description = "No categories", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoriesResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(CategoriesResponseDto {
        categories,
    })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::modules::storage::InMemoryTriviaStore;
    use crate::shared::test_helpers::{seeded_store, test_server, FailingStore};

    #[tokio::test]
    async fn test_list_categories() {
        let server = test_server(seeded_store(0).await);

        let response = server.get("/categories").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["categories"]["1"], "Science");
        assert_eq!(body["categories"]["6"], "Sports");
    }

    #[tokio::test]
    async fn test_no_categories_is_not_found() {
        let server = test_server(Arc::new(InMemoryTriviaStore::default()));

        let response = server.get("/categories").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({"success": false, "error": 404, "message": "Resource NOT found"})
        );
    }

    #[tokio::test]
    async fn test_unknown_category_path_is_not_found() {
        let server = test_server(seeded_store(0).await);

        let response = server.get("/categories/1").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["message"], "Resource NOT found");
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let server = test_server(Arc::new(FailingStore));

        let response = server.get("/categories").await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<Value>(),
            json!({"success": false, "error": 500, "message": "Internal server error"})
        );
    }
}
