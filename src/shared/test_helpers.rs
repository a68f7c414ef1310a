use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;

use crate::core::config::{AppConfig, SwaggerConfig, TriviaConfig};
use crate::core::error::{AppError, Result};
use crate::core::router::{build_router, AppServices};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::storage::{InMemoryTriviaStore, TriviaStore};
use crate::shared::constants::{DEFAULT_CATEGORIES, DEFAULT_QUESTIONS_PER_PAGE};

pub fn new_question(text: &str, category: &str) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: Word().fake(),
        category: Some(category.to_string()),
        difficulty: Some((1..=5).fake()),
    }
}

/// In-memory store with the default categories and `count` questions spread across them.
/// Question ids run from 1 to `count`.
pub async fn seeded_store(count: usize) -> Arc<InMemoryTriviaStore> {
    let store = Arc::new(InMemoryTriviaStore::with_categories(DEFAULT_CATEGORIES));
    for i in 0..count {
        let text: String = Sentence(3..8).fake();
        let category = (i % DEFAULT_CATEGORIES.len() + 1).to_string();
        store
            .insert_question(new_question(&text, &category))
            .await
            .unwrap();
    }
    store
}

pub fn test_app_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_allowed_origins: vec!["*".to_string()],
        max_request_body_size: 64 * 1024,
    }
}

pub fn test_router(store: Arc<dyn TriviaStore>) -> Router {
    let trivia = TriviaConfig {
        questions_per_page: DEFAULT_QUESTIONS_PER_PAGE,
    };
    let services = AppServices::new(store, &trivia);
    build_router(&services, &test_app_config(), &SwaggerConfig::from_env())
}

pub fn test_server(store: Arc<dyn TriviaStore>) -> TestServer {
    TestServer::new(test_router(store)).unwrap()
}

/// Store whose every call fails as if the connection pool were exhausted
pub struct FailingStore;

fn pool_timed_out<T>() -> Result<T> {
    Err(AppError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl TriviaStore for FailingStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        pool_timed_out()
    }

    async fn find_category(&self, _id: i32) -> Result<Option<Category>> {
        pool_timed_out()
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        pool_timed_out()
    }

    async fn list_questions_by_category(&self, _category: &str) -> Result<Vec<Question>> {
        pool_timed_out()
    }

    async fn insert_question(&self, _question: NewQuestion) -> Result<Question> {
        pool_timed_out()
    }

    async fn delete_question(&self, _id: i32) -> Result<bool> {
        pool_timed_out()
    }
}
