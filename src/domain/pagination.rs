//! Pagination - 分页窗口
//!
//! 分页直接在内存中的完整结果集上切片：
//! `start = (page - 1) * 10`，`end = start + 10`（左闭右开）。
//! 超出末尾的页返回空列表，不视为错误。

/// 每页题目数
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 页码（从 1 开始，无上限）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u64);

impl Page {
    pub fn new(number: i64) -> Result<Self, &'static str> {
        u64::try_from(number)
            .ok()
            .filter(|n| *n >= 1)
            .map(Self)
            .ok_or("page must be a positive integer")
    }

    /// 超出 i64 的纯数字页码，必然越过末尾
    pub fn last() -> Self {
        Self(u64::MAX)
    }

    /// 窗口起点
    pub fn start(&self) -> usize {
        usize::try_from(self.0 - 1)
            .unwrap_or(usize::MAX)
            .saturating_mul(QUESTIONS_PER_PAGE)
    }

    /// 窗口终点（不含）
    pub fn end(&self) -> usize {
        self.start().saturating_add(QUESTIONS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

/// 取出指定页的元素
pub fn paginate<T: Clone>(items: &[T], page: Page) -> Vec<T> {
    let len = items.len();
    let start = page.start().min(len);
    let end = page.end().min(len);
    items[start..end].to_vec()
}
