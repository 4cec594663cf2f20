//! Quiz Queries

use crate::domain::QuizScope;

/// 随机抽取下一道未出过的题目
#[derive(Debug, Clone, Default)]
pub struct NextQuizQuestion {
    pub previous_questions: Vec<i64>,
    pub scope: QuizScope,
}
