//! Question - 题目实体

/// 已持久化的题目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// 分类 ID（弱引用，存储层不做外键约束）
    pub category: i64,
    pub difficulty: i64,
}

/// 待创建的题目
///
/// 不变量:
/// - question / answer 不能为空白
/// - 文本原样保存，不做 trim 等转换
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: i64,
    difficulty: i64,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Result<Self, &'static str> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() {
            return Err("question text cannot be empty");
        }
        if answer.trim().is_empty() {
            return Err("answer text cannot be empty");
        }
        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> i64 {
        self.category
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }

    /// 绑定存储分配的 ID
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
