//! Category - 分类实体
//!
//! 分类对 API 只读，由外部初始化（或启动时的默认种子数据）写入。

/// 题目分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    /// 分类名称，例如 "Science"（存储列名为 `type`）
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}
