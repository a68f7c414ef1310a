use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::quizzes::services::QuizRound;
use crate::shared::deserializers::FlexibleId;

/// Category chosen in the quiz screen; id `0` means all categories
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[schema(value_type = i64)]
    pub id: FlexibleId,
    /// Display name, ignored by the server
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Request DTO for the next quiz question
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    pub quiz_category: QuizCategoryDto,
    /// Ids of the questions already asked in this round
    #[serde(default)]
    pub previous_questions: Vec<i64>,
}

/// Next question of a round, or `question: null` with `round_complete: true`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponseDto {
    pub question: Option<QuestionResponseDto>,
    pub round_complete: bool,
}

impl From<QuizRound> for QuizResponseDto {
    fn from(round: QuizRound) -> Self {
        match round {
            QuizRound::Next(question) => Self {
                question: Some(question.into()),
                round_complete: false,
            },
            QuizRound::Complete => Self {
                question: None,
                round_complete: true,
            },
        }
    }
}
