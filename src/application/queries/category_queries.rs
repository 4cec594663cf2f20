//! Category Queries

/// 列出所有分类查询
#[derive(Debug, Clone)]
pub struct ListCategories;
