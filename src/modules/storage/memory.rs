//! In-memory trivia store
//!
//! Keeps categories and questions in ordered maps behind a `tokio` lock.
//! Ids are handed out from a monotonic sequence and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TriviaStore;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::Category;
use crate::features::questions::models::{NewQuestion, Question};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    last_question_id: i32,
}

#[derive(Default)]
pub struct InMemoryTriviaStore {
    tables: RwLock<Tables>,
}

impl InMemoryTriviaStore {
    /// Store seeded with categories numbered from 1 in the given order.
    pub fn with_categories<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let categories = names
            .into_iter()
            .zip(1..)
            .map(|(name, id)| {
                (
                    id,
                    Category {
                        id,
                        kind: name.to_string(),
                    },
                )
            })
            .collect();

        Self {
            tables: RwLock::new(Tables {
                categories,
                ..Tables::default()
            }),
        }
    }
}

#[async_trait]
impl TriviaStore for InMemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn list_questions_by_category(&self, category: &str) -> Result<Vec<Question>> {
        Ok(self
            .tables
            .read()
            .await
            .questions
            .values()
            .filter(|q| q.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<Question> {
        let mut tables = self.tables.write().await;
        let id = tables
            .last_question_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("question id sequence exhausted".to_string()))?;
        tables.last_question_id = id;

        let question = question.into_question(id);
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }
}
