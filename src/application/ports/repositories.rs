//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Category, NewQuestion, Question, QuizScope};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Question Repository
// ============================================================================

/// Question Repository Port
#[async_trait]
pub trait QuestionRepositoryPort: Send + Sync {
    /// 获取所有题目，按 id 升序
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError>;

    /// 根据 ID 查找题目
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, RepositoryError>;

    /// 插入题目，返回存储分配的 ID
    async fn insert(&self, question: &NewQuestion) -> Result<i64, RepositoryError>;

    /// 删除题目，ID 不存在时返回 `NotFound`
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// 题目总数
    async fn count(&self) -> Result<usize, RepositoryError>;

    /// 题干包含 `term` 的题目（不区分大小写的子串匹配）
    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError>;

    /// 指定分类下的所有题目
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, RepositoryError>;

    /// 出题候选：范围内且不在 `exclude` 中的题目
    async fn find_quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i64],
    ) -> Result<Vec<Question>, RepositoryError>;
}

// ============================================================================
// Category Repository
// ============================================================================

/// Category Repository Port
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// 获取所有分类，按 type 升序
    async fn find_all(&self) -> Result<Vec<Category>, RepositoryError>;

    /// 根据 ID 查找分类
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, RepositoryError>;
}
