use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::questions::dtos::{
    CategoryQuestionsResponseDto, CreatedQuestionResponseDto, QuestionListResponseDto,
    QuestionsPostDto, QuestionsPostResponseDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ApiResponse, Empty, ErrorResponse, PageQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = ApiResponse<QuestionListResponseDto>),
        (status = 400, description = "Invalid page", body = ErrorResponse),
        (status = 404, description = "Page holds no questions", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<ApiResponse<QuestionListResponseDto>>> {
    let page = service.list(query.page()?).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// Create a question, or search questions when the body carries `searchTerm`
///
/// Search is a case-insensitive substring match on the question text; an empty
/// term matches every question.
#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = QuestionsPostDto,
    responses(
        (status = 200, description = "Question created, or search results", body = ApiResponse<QuestionsPostResponseDto>),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "Question could not be stored", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn create_or_search_questions(
    State(service): State<Arc<QuestionService>>,
    AppQuery(query): AppQuery<PageQuery>,
    AppJson(body): AppJson<QuestionsPostDto>,
) -> Result<Json<ApiResponse<QuestionsPostResponseDto>>> {
    match body {
        QuestionsPostDto::Search(dto) => {
            let result = service.search(&dto.search_term, query.page()?).await?;
            Ok(Json(ApiResponse::success(QuestionsPostResponseDto::Search(
                result,
            ))))
        }
        QuestionsPostDto::Create(dto) => {
            dto.validate()
                .map_err(|e| AppError::Validation(e.to_string()))?;

            let question = service.create(dto.into_new_question()?).await?;
            Ok(Json(ApiResponse::success(
                QuestionsPostResponseDto::Created(CreatedQuestionResponseDto {
                    created: question.id,
                }),
            )))
        }
    }
}

/// Delete a question by id
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = ApiResponse<Empty>),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 422, description = "Question could not be deleted", body = ErrorResponse)
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<ApiResponse<Empty>>> {
    service
        .delete(id)
        .await
        .map_err(AppError::or_unprocessable)?;
    Ok(Json(ApiResponse::success(Empty {})))
}

/// List the questions of one category
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i64, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions of the category", body = ApiResponse<CategoryQuestionsResponseDto>),
        (status = 404, description = "Unknown category or empty page", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn list_category_questions(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i64>,
    AppQuery(query): AppQuery<PageQuery>,
) -> Result<Json<ApiResponse<CategoryQuestionsResponseDto>>> {
    let page = query.page()?;
    let questions = service
        .list_by_category(id, page)
        .await
        .map_err(AppError::into_not_found)?;
    Ok(Json(ApiResponse::success(questions)))
}
