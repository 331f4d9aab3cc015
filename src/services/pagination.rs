//! 客户端分页
//!
//! 对已全部加载到内存的行集合按页切片，不触发额外的数据请求。

use std::sync::Arc;

use validator::Validate;

use crate::{
    config::PaginationConfig,
    error::{AppError, Result},
    models::pagination::{PageControls, PageInfo, PageQuery},
};

/// 内存行集合的分页游标
///
/// 行集合以 `Arc` 持有，替换时按指针判断是否为新集合：
/// 新集合回到第 1 页，同一集合只做页码收缩。
#[derive(Debug, Clone)]
pub struct ClientPaginator<T> {
    rows: Arc<Vec<T>>,
    page_size: usize,
    page: usize,
}

impl<T> ClientPaginator<T> {
    /// 创建分页器，`page_size` 为 0 时返回错误
    pub fn new(rows: Vec<T>, page_size: usize) -> Result<Self> {
        Self::shared(Arc::new(rows), page_size)
    }

    /// 以共享的行集合创建分页器，之后可用同一个 `Arc` 调用 [`Self::replace_rows`]
    pub fn shared(rows: Arc<Vec<T>>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(AppError::InvalidPageSize(page_size));
        }

        Ok(Self {
            rows,
            page_size,
            page: 1,
        })
    }

    /// 按请求参数创建分页器并跳转到请求页（超出范围时收缩）
    ///
    /// 只校验 [`crate::config::PAGE_SIZE_CEILING`]，不应用配置中的 `max_page_size`；
    /// 需要按配置限制时使用 [`Self::from_query_with_config`]。
    pub fn from_query(rows: Vec<T>, query: &PageQuery) -> Result<Self> {
        query.validate()?;

        let mut paginator = Self::new(rows, query.page_size)?;
        paginator.go_to_page(query.page);
        Ok(paginator)
    }

    /// 同 [`Self::from_query`]，但每页行数先按配置收缩到 `max_page_size`
    pub fn from_query_with_config(
        rows: Vec<T>,
        query: &PageQuery,
        pagination: &PaginationConfig,
    ) -> Result<Self> {
        query.validate()?;

        let page_size = pagination.clamp_page_size(Some(query.page_size));
        if page_size != query.page_size {
            tracing::debug!(
                requested = query.page_size,
                page_size,
                "Page size clamped by configuration"
            );
        }

        let mut paginator = Self::new(rows, page_size)?;
        paginator.go_to_page(query.page);
        Ok(paginator)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn rows(&self) -> &Arc<Vec<T>> {
        &self.rows
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    /// `max(1, ceil(len / page_size))`
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    /// 当前页的行，保持原有顺序；最后一页可能不足一页
    pub fn current_page_rows(&self) -> &[T] {
        let (start, end) = self.bounds();
        &self.rows[start..end]
    }

    /// 跳转到指定页，越界请求静默收缩到 [1, total_pages]
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.go_to_page(self.page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> usize {
        self.go_to_page(self.page.saturating_sub(1))
    }

    pub fn first_page(&mut self) -> usize {
        self.go_to_page(1)
    }

    pub fn last_page(&mut self) -> usize {
        self.go_to_page(self.total_pages())
    }

    /// 替换行集合
    ///
    /// 与当前集合不是同一个 `Arc` 时页码重置为 1。
    pub fn replace_rows(&mut self, rows: Arc<Vec<T>>) {
        if !Arc::ptr_eq(&self.rows, &rows) {
            if self.page != 1 {
                tracing::debug!(
                    previous_page = self.page,
                    rows = rows.len(),
                    "Row set replaced, reset to first page"
                );
            }
            self.page = 1;
        }
        self.rows = rows;
        self.clamp_page();
    }

    /// 以新的 `Vec` 替换行集合，总是视为新集合
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.replace_rows(Arc::new(rows));
    }

    /// 修改每页行数，当前页超出新的总页数时收缩
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(AppError::InvalidPageSize(page_size));
        }

        self.page_size = page_size;
        self.clamp_page();
        Ok(())
    }

    pub fn page_info(&self) -> PageInfo {
        let total_pages = self.total_pages();
        let (start, end) = self.bounds();
        let (first_row, last_row) = if start == end { (0, 0) } else { (start + 1, end) };

        PageInfo {
            page: self.page,
            page_size: self.page_size,
            total_pages,
            total_rows: self.rows.len(),
            has_previous: self.page > 1,
            has_next: self.page < total_pages,
            first_row,
            last_row,
        }
    }

    /// 翻页按钮状态，`loading` 为数据源是否仍在加载
    pub fn controls(&self, loading: bool) -> PageControls {
        PageControls::from_info(&self.page_info(), loading)
    }

    fn bounds(&self) -> (usize, usize) {
        let len = self.rows.len();
        let start = (self.page - 1).saturating_mul(self.page_size).min(len);
        let end = start.saturating_add(self.page_size).min(len);
        (start, end)
    }

    fn clamp_page(&mut self) {
        let total_pages = self.total_pages();
        if self.page > total_pages {
            tracing::debug!(
                page = self.page,
                total_pages,
                "Page out of range, clamped to last page"
            );
            self.page = total_pages;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PAGE_SIZE_CEILING;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = ClientPaginator::new(numbers(5), 0).unwrap_err();
        assert_eq!(err, AppError::InvalidPageSize(0));
    }

    #[test]
    fn test_empty_rows() {
        let paginator = ClientPaginator::<usize>::new(Vec::new(), 10).unwrap();
        assert_eq!(paginator.total_pages(), 1);
        assert_eq!(paginator.page(), 1);
        assert!(paginator.current_page_rows().is_empty());

        let info = paginator.page_info();
        assert_eq!((info.first_row, info.last_row), (0, 0));
    }

    #[test]
    fn test_last_page_is_short() {
        let mut paginator = ClientPaginator::new(numbers(25), 10).unwrap();
        assert_eq!(paginator.total_pages(), 3);
        assert_eq!(paginator.last_page(), 3);
        assert_eq!(paginator.current_page_rows(), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut paginator = ClientPaginator::new(numbers(25), 10).unwrap();
        assert_eq!(paginator.go_to_page(0), 1);
        assert_eq!(paginator.go_to_page(99), 3);
        assert_eq!(paginator.next_page(), 3);
        assert_eq!(paginator.first_page(), 1);
        assert_eq!(paginator.previous_page(), 1);
    }

    #[test]
    fn test_same_arc_keeps_page() {
        let rows = Arc::new(numbers(50));
        let mut paginator = ClientPaginator::shared(rows.clone(), 10).unwrap();
        paginator.go_to_page(4);

        paginator.replace_rows(rows);
        assert_eq!(paginator.page(), 4);
    }

    #[test]
    fn test_equal_content_new_arc_resets() {
        let mut paginator = ClientPaginator::new(numbers(50), 10).unwrap();
        paginator.go_to_page(4);

        paginator.replace_rows(Arc::new(numbers(50)));
        assert_eq!(paginator.page(), 1);
    }

    #[test]
    fn test_page_size_change_clamps() {
        let mut paginator = ClientPaginator::new(numbers(50), 10).unwrap();
        paginator.go_to_page(5);

        paginator.set_page_size(25).unwrap();
        assert_eq!(paginator.page(), 2);
        assert_eq!(paginator.current_page_rows().len(), 25);

        assert!(paginator.set_page_size(0).is_err());
        assert_eq!(paginator.page_size(), 25);
    }

    #[test]
    fn test_from_query_with_config_caps_page_size() {
        let query = PageQuery {
            page: 2,
            page_size: PAGE_SIZE_CEILING,
        };
        let pagination = PaginationConfig::default();

        let paginator =
            ClientPaginator::from_query_with_config(numbers(450), &query, &pagination).unwrap();
        assert_eq!(paginator.page_size(), 100);
        assert_eq!(paginator.page(), 2);
        assert_eq!(paginator.current_page_rows()[0], 101);

        // 不带配置时只受硬性上界限制
        let paginator = ClientPaginator::from_query(numbers(450), &query).unwrap();
        assert_eq!(paginator.page_size(), PAGE_SIZE_CEILING);
    }

    #[test]
    fn test_from_query() {
        let query = PageQuery {
            page: 9,
            page_size: 20,
        };
        let paginator = ClientPaginator::from_query(numbers(45), &query).unwrap();
        assert_eq!(paginator.page(), 3);

        let bad = PageQuery {
            page: 0,
            page_size: 20,
        };
        let err = ClientPaginator::from_query(numbers(45), &bad).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
