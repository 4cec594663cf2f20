//! Category HTTP Handlers

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use super::parse_page;
use crate::application::{ListCategories, ListQuestionsByCategory};
use crate::infrastructure::http::dto::{
    ApiResponse, CategoriesResponse, CategoryMap, PageQuery, QuestionPageResponse,
    QuestionResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<CategoriesResponse>>, ApiError> {
    let categories = state.list_categories_handler.handle(ListCategories).await?;

    Ok(Json(ApiResponse::success(CategoriesResponse {
        categories: CategoryMap(categories),
    })))
}

/// GET /categories/:category_id/questions
pub async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    category_id: Result<Path<i64>, PathRejection>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<QuestionPageResponse>>, ApiError> {
    let Path(category_id) = category_id?;
    let query = ListQuestionsByCategory {
        category_id,
        page: parse_page(page)?,
    };

    let result = state.list_questions_by_category_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(QuestionPageResponse {
        questions: result.questions.into_iter().map(QuestionResponse::from).collect(),
        total_questions: result.total_questions,
        current_category: None,
    })))
}
