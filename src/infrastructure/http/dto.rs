//! Data Transfer Objects
//!
//! 所有响应都是带 `success` 字段的 JSON 对象；题目统一格式化为
//! `{id, question, answer, category, difficulty}`。

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::{Category, Question};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式：`success` 与业务字段平铺在同一层
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// 查询参数
// ============================================================================

/// `?page=N`，缺省为第 1 页
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

// ============================================================================
// Category DTOs
// ============================================================================

/// `{id: type, ...}`，键顺序与分类列表顺序（type 升序）一致
#[derive(Debug)]
pub struct CategoryMap(pub Vec<Category>);

impl Serialize for CategoryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.id, &category.kind)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

// ============================================================================
// Question DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// 全部题目分页 + 全部分类
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<QuestionResponse>,
    pub categories: CategoryMap,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// 搜索 / 分类筛选的分页结果
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<QuestionResponse>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// 网页客户端会把 category / difficulty 作为字符串提交
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: String,
    pub answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub category: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub difficulty: i64,
}

#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub created: i64,
    /// 新题目的题干
    pub questions: String,
    pub total_questions: usize,
    pub current_category: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub delete: i64,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuestionsRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

// ============================================================================
// Quiz DTOs
// ============================================================================

/// `quiz_category` 可以是 `{id, type}`，也可以是任意假值（表示全部分类）
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
    #[serde(default)]
    pub quiz_category: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub question: QuestionResponse,
}

/// 候选题用完时只返回 `{"question": false}`，不带 `success`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Next(ApiResponse<QuizQuestion>),
    Exhausted { question: bool },
}

impl QuizResponse {
    pub fn exhausted() -> Self {
        Self::Exhausted { question: false }
    }
}
