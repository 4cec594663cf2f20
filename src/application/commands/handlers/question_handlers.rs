//! Question Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateQuestion, DeleteQuestion};
use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRepositoryPort, QuestionRepositoryPort, RepositoryError};
use crate::domain::NewQuestion;

// ============================================================================
// CreateQuestion
// ============================================================================

/// 创建题目响应
#[derive(Debug, Clone)]
pub struct CreateQuestionResponse {
    pub id: i64,
    pub question: String,
    pub total_questions: usize,
    /// 所属分类名称
    pub current_category: String,
}

/// CreateQuestion Handler
pub struct CreateQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl CreateQuestionHandler {
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
        command: CreateQuestion,
    ) -> Result<CreateQuestionResponse, ApplicationError> {
        let new_question = NewQuestion::new(
            command.question,
            command.answer,
            command.category,
            command.difficulty,
        )
        .map_err(ApplicationError::validation)?;

        // 分类引用不做外键约束，只在这里解析名称；先解析再插入，失败时不留下数据
        let category = self
            .category_repo
            .find_by_id(new_question.category())
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", new_question.category()))?;

        let id = self.question_repo.insert(&new_question).await?;
        let total_questions = self.question_repo.count().await?;

        tracing::info!(
            question_id = id,
            category = %category.kind,
            difficulty = new_question.difficulty(),
            "Question created"
        );

        Ok(CreateQuestionResponse {
            id,
            question: new_question.question().to_string(),
            total_questions,
            current_category: category.kind,
        })
    }
}

// ============================================================================
// DeleteQuestion
// ============================================================================

/// DeleteQuestion Handler
pub struct DeleteQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl DeleteQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    pub async fn handle(&self, command: DeleteQuestion) -> Result<i64, ApplicationError> {
        let question_id = command.question_id;

        // 检查题目是否存在
        self.question_repo
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Question", question_id))?;

        // 并发删除时行可能已经不在了
        self.question_repo
            .delete(question_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ApplicationError::not_found("Question", question_id),
                other => other.into(),
            })?;

        tracing::info!(question_id, "Question deleted");

        Ok(question_id)
    }
}
