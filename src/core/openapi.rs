use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::questions::{dtos as questions_dtos, handlers as questions_handlers};
use crate::features::quizzes::{dtos as quizzes_dtos, handlers as quizzes_handlers};
use crate::shared::types::{ApiResponse, Empty, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        questions_handlers::list_category_questions,
        // Questions
        questions_handlers::list_questions,
        questions_handlers::create_or_search_questions,
        questions_handlers::delete_question,
        // Quizzes
        quizzes_handlers::next_question,
    ),
    components(
        schemas(
            // Shared
            Empty,
            ErrorResponse,
            ApiResponse<Empty>,
            // Categories
            categories_dtos::CategoriesResponseDto,
            ApiResponse<categories_dtos::CategoriesResponseDto>,
            // Questions
            questions_dtos::QuestionResponseDto,
            questions_dtos::QuestionListResponseDto,
            questions_dtos::SearchQuestionsDto,
            questions_dtos::SearchQuestionsResponseDto,
            questions_dtos::CategoryQuestionsResponseDto,
            questions_dtos::CreateQuestionDto,
            questions_dtos::CreatedQuestionResponseDto,
            questions_dtos::QuestionsPostDto,
            questions_dtos::QuestionsPostResponseDto,
            ApiResponse<questions_dtos::QuestionListResponseDto>,
            ApiResponse<questions_dtos::CategoryQuestionsResponseDto>,
            ApiResponse<questions_dtos::QuestionsPostResponseDto>,
            // Quizzes
            quizzes_dtos::QuizCategoryDto,
            quizzes_dtos::QuizRequestDto,
            quizzes_dtos::QuizResponseDto,
            ApiResponse<quizzes_dtos::QuizResponseDto>,
        )
    ),
    tags(
        (name = "categories", description = "Trivia categories"),
        (name = "questions", description = "Question listing, search, creation and deletion"),
        (name = "quizzes", description = "Quiz rounds"),
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Trivia questions, categories and quiz rounds",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
