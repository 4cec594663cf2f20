//! 未匹配路由、不支持的方法与 panic 的兜底响应

use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::infrastructure::http::error::ApiError;

/// 未知路由返回 404 错误信封
pub async fn route_not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// 路由存在但方法不支持时返回 405 错误信封
pub async fn method_not_allowed(method: axum::http::Method, uri: axum::http::Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}

/// 处理函数 panic 时返回 500 错误信封
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}
