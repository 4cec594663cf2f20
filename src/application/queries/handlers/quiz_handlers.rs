//! Quiz Query Handlers

use rand::seq::SliceRandom;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::QuestionRepositoryPort;
use crate::application::queries::NextQuizQuestion;
use crate::domain::Question;

/// NextQuizQuestion Handler
pub struct NextQuizQuestionHandler {
    question_repo: Arc<dyn QuestionRepositoryPort>,
}

impl NextQuizQuestionHandler {
    pub fn new(question_repo: Arc<dyn QuestionRepositoryPort>) -> Self {
        Self { question_repo }
    }

    /// 候选题目用完时返回 `None`
    pub async fn handle(&self, query: NextQuizQuestion) -> Result<Option<Question>, ApplicationError> {
        let candidates = self
            .question_repo
            .find_quiz_candidates(query.scope, &query.previous_questions)
            .await?;

        let picked = candidates.choose(&mut rand::thread_rng()).cloned();

        tracing::debug!(
            scope = ?query.scope,
            previous = query.previous_questions.len(),
            candidates = candidates.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "Quiz question selected"
        );

        Ok(picked)
    }
}
