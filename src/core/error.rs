//! 核心错误处理模块

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// 500 响应中返回给客户端的固定信息，内部细节只写入日志
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("ValidationError: {0}")]
    Validation(String),
    #[error("NotFoundError: {0}")]
    NotFound(String),
    #[error("TimeoutError: Request timed out")]
    Timeout,
    #[error("InternalServerError: {0}")]
    InternalServerError(String),
}

/// 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl CoreError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Timeout => StatusCode::REQUEST_TIMEOUT,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn product_not_found() -> Self {
        CoreError::NotFound("Product not found".to_string())
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            CoreError::InternalServerError(detail) => {
                error!("内部错误: {}", detail);
                format!("InternalServerError: {}", INTERNAL_ERROR_MESSAGE)
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        CoreError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Validation error".to_string())
                })
            })
            .collect();
        messages.sort();

        CoreError::Validation(messages.join(", "))
    }
}
