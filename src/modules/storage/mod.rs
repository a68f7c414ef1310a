//! Storage module for trivia data
//!
//! Defines the `TriviaStore` seam the services depend on, with a PostgreSQL
//! adapter for deployments and an in-memory adapter for local runs and tests.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

pub use memory::InMemoryTriviaStore;
pub use postgres::PgTriviaStore;

/// Persistence operations for categories and questions.
///
/// Every listing is ordered by id ascending.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category(&self, id: i32) -> Result<Option<Category>>;

    async fn list_questions(&self) -> Result<Vec<Question>>;

    /// Questions whose category text equals `category` exactly.
    async fn list_questions_by_category(&self, category: &str) -> Result<Vec<Question>>;

    async fn insert_question(&self, question: NewQuestion) -> Result<Question>;

    /// Remove a question. Returns `false` when no question had that id.
    async fn delete_question(&self, id: i32) -> Result<bool>;
}
