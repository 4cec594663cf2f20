//! HTTP Middleware
//!
//! 按状态码记录请求结果

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// 请求结果日志中间件
///
/// 4xx 记 warn，5xx 记 error，其余记 debug。
/// 错误原因已在 `ApiError::into_response()` 中记录，这里只补充方法、路径和耗时。
pub async fn status_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(%method, %uri, status = status.as_u16(), elapsed_ms, "HTTP server error");
    } else if status.is_client_error() {
        tracing::warn!(%method, %uri, status = status.as_u16(), elapsed_ms, "HTTP client error");
    } else {
        tracing::debug!(%method, %uri, status = status.as_u16(), elapsed_ms, "HTTP request done");
    }

    response
}
