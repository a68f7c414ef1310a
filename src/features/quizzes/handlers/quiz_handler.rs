use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppJsonRejection};
use crate::features::quizzes::dtos::{QuizRequestDto, QuizResponseDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Draw the next quiz question
///
/// Picks uniformly at random among the questions of `quiz_category` (id `0`
/// for all categories) not listed in `previous_questions`. When none are left
/// the round is complete: `question` is null and `round_complete` is true.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question or round complete", body = ApiResponse<QuizResponseDto>),
        (status = 422, description = "Malformed request or unknown category", body = ErrorResponse)
    ),
    tag = "quizzes"
)]
pub async fn next_question(
    State(service): State<Arc<QuizService>>,
    body: std::result::Result<AppJson<QuizRequestDto>, AppJsonRejection>,
) -> Result<Json<ApiResponse<QuizResponseDto>>> {
    let AppJson(dto) = body.map_err(|rejection| AppError::Unprocessable(rejection.message()))?;

    tracing::debug!(
        "Quiz request: category={} ({:?}), previous={}",
        dto.quiz_category.id.0,
        dto.quiz_category.kind,
        dto.previous_questions.len()
    );

    let round = service
        .next_question(dto.quiz_category.id.0, &dto.previous_questions)
        .await
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    Ok(Json(ApiResponse::success(round.into())))
}
