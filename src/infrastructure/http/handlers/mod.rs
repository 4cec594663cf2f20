//! HTTP Handlers

mod categories;
mod fallback;
mod ping;
mod questions;
mod quizzes;

#[cfg(test)]
mod tests;

pub use categories::*;
pub use fallback::*;
pub use ping::*;
pub use questions::*;
pub use quizzes::*;

use axum::extract::{rejection::QueryRejection, Query};

use crate::domain::Page;
use crate::infrastructure::http::dto::PageQuery;
use crate::infrastructure::http::error::ApiError;

/// 解析 `?page=N`
///
/// 缺省、空串或不是整数时取第 1 页；小于 1 时返回 400。
fn parse_page(query: Result<Query<PageQuery>, QueryRejection>) -> Result<Page, ApiError> {
    let Query(query) = query?;
    let Some(raw) = query.page else {
        return Ok(Page::default());
    };
    let raw = raw.trim();
    match raw.parse::<i64>() {
        Ok(n) => Page::new(n).map_err(|e| ApiError::BadRequest(e.to_string())),
        Err(_) if is_huge_positive(raw) => Ok(Page::last()),
        Err(_) => Ok(Page::default()),
    }
}

/// 超出 i64 范围的正整数
fn is_huge_positive(raw: &str) -> bool {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
