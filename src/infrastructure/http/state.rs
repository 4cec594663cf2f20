//! Application State
//!
//! 启动时构造一次，通过 `Arc<AppState>` 传给每个请求处理函数

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateQuestionHandler, DeleteQuestionHandler,
    // Query handlers
    ListCategoriesHandler, ListQuestionsByCategoryHandler, ListQuestionsHandler,
    NextQuizQuestionHandler, SearchQuestionsHandler,
    // Ports
    CategoryRepositoryPort, QuestionRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_question_handler: CreateQuestionHandler,
    pub delete_question_handler: DeleteQuestionHandler,

    // ========== Query Handlers ==========
    pub list_categories_handler: ListCategoriesHandler,
    pub list_questions_handler: ListQuestionsHandler,
    pub search_questions_handler: SearchQuestionsHandler,
    pub list_questions_by_category_handler: ListQuestionsByCategoryHandler,
    pub next_quiz_question_handler: NextQuizQuestionHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            create_question_handler: CreateQuestionHandler::new(
                question_repo.clone(),
                category_repo.clone(),
            ),
            delete_question_handler: DeleteQuestionHandler::new(question_repo.clone()),

            // Query handlers
            list_categories_handler: ListCategoriesHandler::new(category_repo.clone()),
            list_questions_handler: ListQuestionsHandler::new(
                question_repo.clone(),
                category_repo,
            ),
            search_questions_handler: SearchQuestionsHandler::new(question_repo.clone()),
            list_questions_by_category_handler: ListQuestionsByCategoryHandler::new(
                question_repo.clone(),
            ),
            next_quiz_question_handler: NextQuizQuestionHandler::new(question_repo),
        }
    }
}
