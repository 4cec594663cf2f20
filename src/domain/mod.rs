//! Domain Layer - 领域层
//!
//! - Question: 题目实体与新建题目的校验
//! - Category: 分类实体
//! - Pagination: 固定页长的分页窗口
//! - Quiz: 出题范围

mod category;
mod pagination;
mod question;
mod quiz;

pub use category::Category;
pub use pagination::{paginate, Page, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question};
pub use quiz::QuizScope;
