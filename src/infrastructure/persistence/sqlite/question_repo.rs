//! SQLite Question Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{QuestionRepositoryPort, RepositoryError};
use crate::domain::{NewQuestion, Question, QuizScope};

const SELECT_QUESTION: &str = "SELECT id, question, answer, category, difficulty FROM questions";

/// SQLite Question Repository
pub struct SqliteQuestionRepository {
    pool: DbPool,
}

impl SqliteQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

/// 题干是否包含搜索词（Unicode 大小写不敏感）
fn matches_term(text: &str, needle: &str) -> bool {
    text.to_lowercase().contains(needle)
}

#[async_trait]
impl QuestionRepositoryPort for SqliteQuestionRepository {
    async fn find_all(&self) -> Result<Vec<Question>, RepositoryError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_QUESTION))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, RepositoryError> {
        let row: Option<QuestionRow> = sqlx::query_as(&format!("{} WHERE id = ?", SELECT_QUESTION))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(row.map(Question::from))
    }

    async fn insert(&self, question: &NewQuestion) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(question.question())
        .bind(question.answer())
        .bind(question.category())
        .bind(question.difficulty())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("question {}", id)));
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        usize::try_from(count).map_err(|e| RepositoryError::SerializationError(e.to_string()))
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        // SQLite 的 LIKE 只对 ASCII 忽略大小写，过滤放在内存里做
        let needle = term.to_lowercase();
        let rows: Vec<QuestionRow> = sqlx::query_as(&format!("{} ORDER BY id", SELECT_QUESTION))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows
            .into_iter()
            .filter(|row| matches_term(&row.question, &needle))
            .map(Question::from)
            .collect())
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Question>, RepositoryError> {
        let rows: Vec<QuestionRow> =
            sqlx::query_as(&format!("{} WHERE category = ? ORDER BY id", SELECT_QUESTION))
                .bind(category_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_quiz_candidates(
        &self,
        scope: QuizScope,
        exclude: &[i64],
    ) -> Result<Vec<Question>, RepositoryError> {
        let mut conditions: Vec<String> = Vec::new();
        if scope.category_id().is_some() {
            conditions.push("category = ?".to_string());
        }
        if !exclude.is_empty() {
            // 构建 NOT IN 子句的占位符
            let placeholders: Vec<&str> = exclude.iter().map(|_| "?").collect();
            conditions.push(format!("id NOT IN ({})", placeholders.join(", ")));
        }

        let mut query = SELECT_QUESTION.to_string();
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY id");

        let mut sql_query = sqlx::query_as::<_, QuestionRow>(&query);
        if let Some(category_id) = scope.category_id() {
            sql_query = sql_query.bind(category_id);
        }
        for id in exclude {
            sql_query = sql_query.bind(*id);
        }

        let rows: Vec<QuestionRow> = sql_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Question::from).collect())
    }
}
