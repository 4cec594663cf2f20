//! HTTP Error Handling
//!
//! 所有错误响应都是 `{success: false, error: <code>, message: <固定文案>}`，
//! 并以同样的 HTTP 状态码返回。详细原因只写日志。

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message,
        }
    }
}

/// 错误文案
pub mod message {
    pub const BAD_REQUEST: &str = "Bad Request";
    pub const NOT_FOUND: &str = "not_found";
    pub const METHOD_NOT_ALLOWED: &str = "method_not_allowed";
    pub const UNPROCESSABLE: &str = "unprocessable";
    pub const INTERNAL_ERROR: &str = "Internal Server Error";
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    Unprocessable(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => message::BAD_REQUEST,
            ApiError::NotFound(_) => message::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => message::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable(_) => message::UNPROCESSABLE,
            ApiError::Internal(_) => message::INTERNAL_ERROR,
        }
    }

    /// 创建题目时所有失败都按 400 返回
    pub fn into_bad_request(self) -> Self {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::MethodNotAllowed(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Internal(msg) => ApiError::BadRequest(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = status.as_u16(), detail = %msg, "Bad request");
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(error = status.as_u16(), detail = %msg, "Resource not found");
            }
            ApiError::MethodNotAllowed(msg) => {
                tracing::warn!(error = status.as_u16(), detail = %msg, "Method not allowed");
            }
            ApiError::Unprocessable(msg) => {
                tracing::warn!(error = status.as_u16(), detail = %msg, "Unprocessable request");
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = status.as_u16(), detail = %msg, "Internal server error");
            }
        }

        (status, Json(ErrorResponse::new(status, self.message()))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } | ApplicationError::EmptyResult(_) => {
                ApiError::NotFound(e.to_string())
            }
            ApplicationError::ValidationError(msg) => ApiError::BadRequest(msg),
            ApplicationError::RepositoryError(msg) => ApiError::Unprocessable(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// 路径参数不是整数时等同于路由不存在
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}
