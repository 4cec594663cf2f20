//! Question Queries

use crate::domain::Page;

/// 分页列出所有题目（附带全部分类）
#[derive(Debug, Clone)]
pub struct ListQuestions {
    pub page: Page,
}

/// 按题干子串搜索题目
#[derive(Debug, Clone)]
pub struct SearchQuestions {
    pub term: String,
    pub page: Page,
}

/// 分页列出某个分类下的题目
#[derive(Debug, Clone)]
pub struct ListQuestionsByCategory {
    pub category_id: i64,
    pub page: Page,
}
