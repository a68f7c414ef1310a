use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig, TriviaConfig};
use crate::core::error::AppError;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::storage::TriviaStore;

/// Services shared by every request, built once at startup around one store
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

impl AppServices {
    pub fn new(store: Arc<dyn TriviaStore>, trivia: &TriviaConfig) -> Self {
        let categories = Arc::new(CategoryService::new(Arc::clone(&store)));
        let questions = Arc::new(QuestionService::new(
            Arc::clone(&store),
            Arc::clone(&categories),
            trivia.questions_per_page,
        ));
        let quizzes = Arc::new(QuizService::new(store, Arc::clone(&categories)));

        Self {
            categories,
            questions,
            quizzes,
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

async fn not_found_fallback() -> AppError {
    AppError::NotFound("No route matches the request".to_string())
}

async fn method_not_allowed_fallback() -> AppError {
    AppError::MethodNotAllowed("Route does not accept this method".to_string())
}

/// Build the application router with its middleware stack
pub fn build_router(services: &AppServices, app: &AppConfig, swagger: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: swagger.title.clone(),
        version: swagger.version.clone(),
        description: swagger.description.clone(),
    };
    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(questions_routes::routes(Arc::clone(&services.questions)))
        .merge(quizzes_routes::routes(Arc::clone(&services.quizzes)))
        .route("/health", get(health_check))
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
        .layer(DefaultBodyLimit::max(app.max_request_body_size))
        .layer(
            ServiceBuilder::new()
                // Generate X-Request-Id using UUID v7 (or use client-provided one)
                .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(middleware::MakeSpanWithRequestId)
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                // Propagate X-Request-Id to response headers
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(middleware::cors_layer(&app.cors_allowed_origins)),
        )
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderValue, Method, StatusCode};
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{seeded_store, test_server};

    const ORIGIN: &str = "http://localhost:3000";

    #[tokio::test]
    async fn test_cors_headers_on_response() {
        let server = test_server(seeded_store(1).await);

        let response = server
            .get("/categories")
            .add_header(header::ORIGIN, HeaderValue::from_static(ORIGIN))
            .await;
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let server = test_server(seeded_store(1).await);

        let response = server
            .method(Method::OPTIONS, "/questions/1")
            .add_header(header::ORIGIN, HeaderValue::from_static(ORIGIN))
            .add_header(
                header::ACCESS_CONTROL_REQUEST_METHOD,
                HeaderValue::from_static("DELETE"),
            )
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let methods = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_ascii_uppercase();
        for method in ["GET", "POST", "DELETE", "OPTIONS"] {
            assert!(methods.contains(method), "{} missing from {}", method, methods);
        }

        let headers = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
            .and_then(|v| v.to_str().ok())
            .unwrap()
            .to_ascii_lowercase();
        assert!(headers.contains("content-type"));
        assert!(headers.contains("authorization"));
    }

    #[tokio::test]
    async fn test_unknown_route_envelope() {
        let server = test_server(seeded_store(0).await);

        let response = server.get("/no/such/route").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<Value>(),
            json!({"success": false, "error": 404, "message": "Resource NOT found"})
        );
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let server = test_server(seeded_store(0).await);

        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert!(response.headers().get("x-request-id").is_some());
    }

    #[tokio::test]
    async fn test_openapi_document_lists_endpoints() {
        let server = test_server(seeded_store(0).await);

        let doc = server.get("/api-docs/openapi.json").await.json::<Value>();
        for path in [
            "/categories",
            "/questions",
            "/questions/{id}",
            "/categories/{id}/questions",
            "/quizzes",
        ] {
            assert!(doc["paths"].get(path).is_some(), "{} not documented", path);
        }
    }
}
