use std::collections::HashSet;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::categories::services::CategoryService;
use crate::features::questions::models::Question;
use crate::features::quizzes::services::selector::select_unseen;
use crate::modules::storage::TriviaStore;
use crate::shared::constants::ALL_CATEGORIES_ID;

/// Outcome of asking for the next quiz question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizRound {
    Next(Question),
    /// Every question of the selected category has been asked
    Complete,
}

/// Service for playing quiz rounds
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
    categories: Arc<CategoryService>,
}

impl QuizService {
    pub fn new(store: Arc<dyn TriviaStore>, categories: Arc<CategoryService>) -> Self {
        Self { store, categories }
    }

    /// Questions eligible for a round in `category_id`; `0` selects all questions.
    ///
    /// Questions are matched on the category id alone. An id that matches no
    /// question must name an existing category.
    async fn candidates(&self, category_id: i64) -> Result<Vec<Question>> {
        if category_id == ALL_CATEGORIES_ID {
            return self.store.list_questions().await;
        }

        let pool = self
            .store
            .list_questions_by_category(&category_id.to_string())
            .await?;
        if pool.is_empty() {
            self.categories.get(category_id).await?;
        }
        Ok(pool)
    }

    /// Draw the next question of a round, skipping the ids already asked.
    pub async fn next_question(&self, category_id: i64, previous: &[i64]) -> Result<QuizRound> {
        let pool = self.candidates(category_id).await?;
        let previous: HashSet<i64> = previous.iter().copied().collect();

        let picked = select_unseen(&pool, &previous, &mut rand::thread_rng()).cloned();

        match picked {
            Some(question) => {
                tracing::debug!(
                    "Quiz category {}: picked question {} ({} asked, {} in pool)",
                    category_id,
                    question.id,
                    previous.len(),
                    pool.len()
                );
                Ok(QuizRound::Next(question))
            }
            None => {
                tracing::debug!("Quiz category {}: round complete", category_id);
                Ok(QuizRound::Complete)
            }
        }
    }
}
