//! Question Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRepositoryPort, QuestionRepositoryPort};
use crate::application::queries::{ListQuestions, ListQuestionsByCategory, SearchQuestions};
use crate::domain::{paginate, Category, Page, Question};

// ============================================================================
// Response DTOs
// ============================================================================

/// 一页题目
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// 分页前的总数
    pub total_questions: usize,
}

impl QuestionPage {
    fn from_all(all: &[Question], page: Page) -> Self {
        Self {
            questions: paginate(all, page),
            total_questions: all.len(),
        }
    }
}

/// 题目列表页（附带所有分类）
#[derive(Debug, Clone)]
pub struct QuestionListResponse {
    pub page: QuestionPage,
    pub categories: Vec<Category>,
}

// ============================================================================
// Handlers
// ============================================================================

/// ListQuestions Handler
pub struct ListQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListQuestionsHandler {
    pub fn new(
        question_repo: Arc<dyn QuestionRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            question_repo,
            category_repo,
        }
    }

    pub async fn handle(
        &self,
        query: ListQuestions,
    ) -> Result<QuestionListResponse, ApplicationError> {
        let questions = self.question_repo.find_all().await?;
        if questions.is_empty() {
            return Err(ApplicationError::EmptyResult("questions"));
        }
        let categories = self.category_repo.find_all().await?;

        Ok(QuestionListResponse {
            page: QuestionPage::from_all(&questions, query.page),
            categories,
        })
    }
}

/// SearchQuestions Handler
pub struct SearchQuestionsHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl SearchQuestionsHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    /// 没有匹配时返回空页，不视为错误
    pub async fn handle(&self, query: SearchQuestions) -> Result<QuestionPage, ApplicationError> {
        let matches = self.question_repo.search(&query.term).await?;
        tracing::debug!(term = %query.term, matches = matches.len(), "Questions searched");
        Ok(QuestionPage::from_all(&matches, query.page))
    }
}

/// ListQuestionsByCategory Handler
pub struct ListQuestionsByCategoryHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl ListQuestionsByCategoryHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(
        &self,
        query: ListQuestionsByCategory,
    ) -> Result<QuestionPage, ApplicationError> {
        let questions = self.question_repo.find_by_category(query.category_id).await?;
        if questions.is_empty() {
            return Err(ApplicationError::EmptyResult("questions"));
        }
        Ok(QuestionPage::from_all(&questions, query.page))
    }
}
