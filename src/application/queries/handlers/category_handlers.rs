//! Category Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CategoryRepositoryPort;
use crate::application::queries::ListCategories;
use crate::domain::Category;

/// ListCategories Handler
pub struct ListCategoriesHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    /// 按 type 升序返回；没有任何分类时返回 `EmptyResult`
    pub async fn handle(&self, _query: ListCategories) -> Result<Vec<Category>, ApplicationError> {
        let categories = self.category_repo.find_all().await?;
        if categories.is_empty() {
            return Err(ApplicationError::EmptyResult("categories"));
        }
        Ok(categories)
    }
}
