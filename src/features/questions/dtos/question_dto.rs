use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::CategoryMap;
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::constants::{MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::shared::deserializers::FlexibleId;

/// Response DTO for question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponseDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub difficulty: Option<i32>,
}

impl From<Question> for QuestionResponseDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Paginated question listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionListResponseDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    /// Always null: the listing is not filtered by category
    pub current_category: Option<i32>,
}

/// Paginated search result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsResponseDto {
    pub questions: Vec<QuestionResponseDto>,
    /// Number of matches across all pages
    pub total_questions: usize,
    pub current_category: Option<i32>,
}

/// Paginated questions of one category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponseDto {
    pub questions: Vec<QuestionResponseDto>,
    pub total_questions: usize,
    pub current_category: i64,
}

/// Request DTO for searching questions
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    /// Case-insensitive substring of the question text; empty matches all
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Request DTO for creating a question
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(
        required(message = "Question is required"),
        length(min = 1, message = "Question must not be empty")
    )]
    pub question: Option<String>,

    #[validate(
        required(message = "Answer is required"),
        length(min = 1, message = "Answer must not be empty")
    )]
    pub answer: Option<String>,

    /// Category id, as a number or numeric string
    #[schema(value_type = Option<i64>)]
    pub category: Option<FlexibleId>,

    #[validate(range(
        min = MIN_DIFFICULTY,
        max = MAX_DIFFICULTY,
        message = "Difficulty must be between 1 and 5"
    ))]
    pub difficulty: Option<i32>,
}

impl CreateQuestionDto {
    /// Convert a validated request into a storable question.
    pub fn into_new_question(self) -> Result<NewQuestion> {
        let question = non_blank("question", self.question)?;
        let answer = non_blank("answer", self.answer)?;

        Ok(NewQuestion {
            question,
            answer,
            category: self.category.map(|c| c.as_reference()),
            difficulty: self.difficulty,
        })
    }
}

fn non_blank(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::Validation(format!("{} must not be blank", field))),
    }
}

/// `POST /questions` carries either a search or a new question
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum QuestionsPostDto {
    Search(SearchQuestionsDto),
    Create(CreateQuestionDto),
}

/// Acknowledgement of a created question
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedQuestionResponseDto {
    /// Id assigned to the new question
    pub created: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QuestionsPostResponseDto {
    Created(CreatedQuestionResponseDto),
    Search(SearchQuestionsResponseDto),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> QuestionsPostDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_search_term_selects_search() {
        match parse(json!({"searchTerm": "title"})) {
            QuestionsPostDto::Search(dto) => assert_eq!(dto.search_term, "title"),
            other => panic!("expected search, got {:?}", other),
        }
    }

    #[test]
    fn test_new_question_selects_create() {
        let body = json!({
            "question": "Who invented the car",
            "answer": "Carl Benz",
            "difficulty": 2,
            "category": "1"
        });
        match parse(body) {
            QuestionsPostDto::Create(dto) => {
                assert!(dto.validate().is_ok());
                let new_question = dto.into_new_question().unwrap();
                assert_eq!(new_question.category.as_deref(), Some("1"));
                assert_eq!(new_question.difficulty, Some(2));
            }
            other => panic!("expected create, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_category_is_stored_as_text() {
        let body = json!({"question": "q", "answer": "a", "category": 4});
        let QuestionsPostDto::Create(dto) = parse(body) else {
            panic!("expected create");
        };
        assert_eq!(dto.into_new_question().unwrap().category.as_deref(), Some("4"));
    }

    #[test]
    fn test_empty_question_fails_validation() {
        let QuestionsPostDto::Create(dto) = parse(json!({"question": "", "answer": "x"})) else {
            panic!("expected create");
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_missing_answer_fails_validation() {
        let QuestionsPostDto::Create(dto) = parse(json!({"question": "q"})) else {
            panic!("expected create");
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_blank_answer_is_rejected() {
        let QuestionsPostDto::Create(dto) = parse(json!({"question": "q", "answer": "   "})) else {
            panic!("expected create");
        };
        assert!(dto.validate().is_ok());
        assert!(matches!(
            dto.into_new_question(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_difficulty_out_of_range() {
        let QuestionsPostDto::Create(dto) =
            parse(json!({"question": "q", "answer": "a", "difficulty": 9}))
        else {
            panic!("expected create");
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_wrong_types_do_not_parse() {
        let body = json!({"question": "q", "answer": 1, "difficulty": "Very", "category": "1"});
        assert!(serde_json::from_value::<QuestionsPostDto>(body).is_err());
    }
}
