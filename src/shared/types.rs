use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::{AppError, Result};

/// Success envelope: `success` sits next to the payload's own fields.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload for operations that only acknowledge success.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct Empty {}

/// Failure envelope shared by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: &str) -> Self {
        Self {
            success: false,
            error,
            message: message.to_string(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page selection for list endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[param(minimum = 1)]
    pub page: Option<i64>,
}

impl PageQuery {
    /// Resolved 1-based page; zero and negative pages are client errors.
    pub fn page(&self) -> Result<usize> {
        match self.page {
            None => Ok(1),
            Some(page) if page >= 1 => usize::try_from(page)
                .map_err(|_| AppError::BadRequest(format!("page {} is out of range", page))),
            Some(page) => Err(AppError::BadRequest(format!(
                "page must be at least 1, got {}",
                page
            ))),
        }
    }
}
