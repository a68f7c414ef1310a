use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::services::CategoryService;
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, QuestionListResponseDto, QuestionResponseDto,
    SearchQuestionsResponseDto,
};
use crate::features::questions::models::{NewQuestion, Question};
use crate::modules::storage::TriviaStore;
use crate::shared::pagination::paginate;
use crate::shared::search::SearchFilter;

/// Service for listing, searching, creating and deleting questions
pub struct QuestionService {
    store: Arc<dyn TriviaStore>,
    categories: Arc<CategoryService>,
    page_size: usize,
}

impl QuestionService {
    pub fn new(
        store: Arc<dyn TriviaStore>,
        categories: Arc<CategoryService>,
        page_size: usize,
    ) -> Self {
        Self {
            store,
            categories,
            page_size: page_size.max(1),
        }
    }

    fn page_of(&self, page: usize, questions: &[Question]) -> Vec<QuestionResponseDto> {
        paginate(page, self.page_size, questions)
            .iter()
            .cloned()
            .map(QuestionResponseDto::from)
            .collect()
    }

    /// One page of all questions, ordered by id.
    ///
    /// Fails with `NotFound` when the page holds no questions.
    pub async fn list(&self, page: usize) -> Result<QuestionListResponseDto> {
        let questions = self.store.list_questions().await?;
        let current = self.page_of(page, &questions);
        if current.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions on page {} ({} total)",
                page,
                questions.len()
            )));
        }

        let categories = self.categories.map().await?;

        Ok(QuestionListResponseDto {
            questions: current,
            total_questions: questions.len(),
            categories,
            current_category: None,
        })
    }

    /// One page of questions whose text contains `term`, ignoring case.
    ///
    /// No matches is a successful, empty result.
    pub async fn search(&self, term: &str, page: usize) -> Result<SearchQuestionsResponseDto> {
        let filter = SearchFilter::new(term);
        let matches = filter.apply(self.store.list_questions().await?);

        tracing::debug!(
            "Search for {:?} matched {} questions",
            term,
            matches.len()
        );

        Ok(SearchQuestionsResponseDto {
            questions: self.page_of(page, &matches),
            total_questions: matches.len(),
            current_category: None,
        })
    }

    /// One page of the questions filed under category `category_id`.
    ///
    /// Questions are matched on the category id alone, so ids missing from the
    /// category table still list their questions. An id that matches no question
    /// is `NotFound` unless the category exists, in which case the list is empty.
    /// Pages past the end of a non-empty result are `NotFound`.
    pub async fn list_by_category(
        &self,
        category_id: i64,
        page: usize,
    ) -> Result<CategoryQuestionsResponseDto> {
        let questions = self
            .store
            .list_questions_by_category(&category_id.to_string())
            .await?;
        if questions.is_empty() {
            self.categories.get(category_id).await?;
        }

        let current = self.page_of(page, &questions);
        if current.is_empty() && !questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions on page {} of category {}",
                page, category_id
            )));
        }

        Ok(CategoryQuestionsResponseDto {
            questions: current,
            total_questions: questions.len(),
            current_category: category_id,
        })
    }

    /// Persist a new question
    pub async fn create(&self, question: NewQuestion) -> Result<QuestionResponseDto> {
        let question = self.store.insert_question(question).await?;

        tracing::info!(
            "Question created: id={}, category={:?}",
            question.id,
            question.category
        );

        Ok(question.into())
    }

    /// Delete a question by id. A missing question is `NotFound`.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let not_found = || AppError::NotFound(format!("Question with id {} not found", id));
        let id = i32::try_from(id).map_err(|_| not_found())?;

        if !self.store.delete_question(id).await? {
            return Err(not_found());
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(())
    }
}
