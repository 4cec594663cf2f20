//! Quiz - 出题范围

/// 出题范围，分类 ID 为 0 表示全部分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    Any,
    Category(i64),
}

impl QuizScope {
    pub fn from_category_id(id: i64) -> Self {
        if id == 0 {
            Self::Any
        } else {
            Self::Category(id)
        }
    }

    pub fn category_id(&self) -> Option<i64> {
        match self {
            Self::Any => None,
            Self::Category(id) => Some(*id),
        }
    }
}

impl Default for QuizScope {
    fn default() -> Self {
        Self::Any
    }
}
