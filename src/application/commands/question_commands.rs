//! Question Commands

/// 创建题目命令
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// 删除题目命令
#[derive(Debug, Clone)]
pub struct DeleteQuestion {
    pub question_id: i64,
}
