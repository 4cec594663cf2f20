//! Quiz HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::application::NextQuizQuestion;
use crate::domain::QuizScope;
use crate::infrastructure::http::dto::{
    ApiResponse, QuestionResponse, QuizQuestion, QuizRequest, QuizResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解析 `quiz_category`
///
/// 假值（null / false / 0 / "" / [] / {}）表示全部分类；
/// 对象取其 `id`（整数或数字字符串），id 为 0 同样表示全部分类。
fn parse_quiz_scope(value: &Value) -> Result<QuizScope, ApiError> {
    match value {
        Value::Null | Value::Bool(false) => Ok(QuizScope::Any),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(QuizScope::Any),
        Value::String(s) if s.is_empty() => Ok(QuizScope::Any),
        Value::Array(a) if a.is_empty() => Ok(QuizScope::Any),
        Value::Object(o) if o.is_empty() => Ok(QuizScope::Any),
        Value::Object(o) => {
            let id = match o.get("id") {
                Some(Value::Number(n)) => n.as_i64(),
                Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
                _ => None,
            }
            .ok_or_else(|| ApiError::BadRequest("quiz_category.id must be an integer".to_string()))?;
            Ok(QuizScope::from_category_id(id))
        }
        other => Err(ApiError::BadRequest(format!(
            "quiz_category must be an object, got {}",
            other
        ))),
    }
}

/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = body?;
    let query = NextQuizQuestion {
        previous_questions: req.previous_questions.unwrap_or_default(),
        scope: parse_quiz_scope(&req.quiz_category)?,
    };

    let picked = state.next_quiz_question_handler.handle(query).await?;

    Ok(Json(match picked {
        Some(question) => QuizResponse::Next(ApiResponse::success(QuizQuestion {
            question: QuestionResponse::from(question),
        })),
        None => QuizResponse::exhausted(),
    }))
}
