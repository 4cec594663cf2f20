//! Question HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use super::parse_page;
use crate::application::{CreateQuestion, DeleteQuestion, ListQuestions, SearchQuestions};
use crate::infrastructure::http::dto::{
    ApiResponse, CategoryMap, CreateQuestionRequest, CreateQuestionResponse,
    DeleteQuestionResponse, PageQuery, QuestionListResponse, QuestionPageResponse,
    QuestionResponse, SearchQuestionsRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /questions
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<QuestionListResponse>>, ApiError> {
    let query = ListQuestions {
        page: parse_page(page)?,
    };

    let result = state.list_questions_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(QuestionListResponse {
        questions: result
            .page
            .questions
            .into_iter()
            .map(QuestionResponse::from)
            .collect(),
        categories: CategoryMap(result.categories),
        total_questions: result.page.total_questions,
        current_category: None,
    })))
}

/// POST /questions
///
/// 任何失败（请求体缺失、字段无效、分类不存在、存储错误）都返回 400
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CreateQuestionResponse>>, ApiError> {
    let Json(req) = body?;
    let command = CreateQuestion {
        question: req.question,
        answer: req.answer,
        category: req.category,
        difficulty: req.difficulty,
    };

    let result = state
        .create_question_handler
        .handle(command)
        .await
        .map_err(|e| ApiError::from(e).into_bad_request())?;

    Ok(Json(ApiResponse::success(CreateQuestionResponse {
        created: result.id,
        questions: result.question,
        total_questions: result.total_questions,
        current_category: result.current_category,
    })))
}

/// DELETE /questions/:question_id
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<DeleteQuestionResponse>>, ApiError> {
    let Path(question_id) = question_id?;

    let deleted = state
        .delete_question_handler
        .handle(DeleteQuestion { question_id })
        .await?;

    Ok(Json(ApiResponse::success(DeleteQuestionResponse { delete: deleted })))
}

/// POST /questions/search
pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    page: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<SearchQuestionsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<QuestionPageResponse>>, ApiError> {
    let page = parse_page(page)?;
    let Json(req) = body?;

    let result = state
        .search_questions_handler
        .handle(SearchQuestions {
            term: req.search_term,
            page,
        })
        .await?;

    Ok(Json(ApiResponse::success(QuestionPageResponse {
        questions: result.questions.into_iter().map(QuestionResponse::from).collect(),
        total_questions: result.total_questions,
        current_category: None,
    })))
}
