//! HTTP Routes
//!
//! API Endpoints:
//! - /categories                      GET     列出所有分类
//! - /categories/:id/questions        GET     分类下的题目（分页）
//! - /questions                       GET     所有题目（分页）+ 所有分类
//! - /questions                       POST    创建题目
//! - /questions/:id                   DELETE  删除题目
//! - /questions/search                POST    按题干子串搜索（分页）
//! - /quizzes                         POST    随机抽取下一道题
//! - /ping                            GET     健康检查

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
///
/// 已知路径上的其它方法统一走 `method_not_allowed`，返回 405 错误信封
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/ping",
            get(handlers::ping).fallback(handlers::method_not_allowed),
        )
        .merge(category_routes())
        .merge(question_routes())
        .route(
            "/quizzes",
            post(handlers::next_quiz_question).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::route_not_found)
}

/// Category 路由
fn category_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories).fallback(handlers::method_not_allowed),
        )
        .route(
            "/categories/:category_id/questions",
            get(handlers::list_category_questions).fallback(handlers::method_not_allowed),
        )
}

/// Question 路由
fn question_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions)
                .post(handlers::create_question)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/questions/search",
            post(handlers::search_questions).fallback(handlers::method_not_allowed),
        )
        .route(
            "/questions/:question_id",
            delete(handlers::delete_question).fallback(handlers::method_not_allowed),
        )
}
