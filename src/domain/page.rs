//! Pagination and ordering types shared by search operations

use serde::{Deserialize, Serialize};

/// Page size applied when the caller does not request one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on the page size a single request may ask for
pub const MAX_PAGE_SIZE: u32 = 100;

/// Field a member search can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Member id - the stable default order
    #[default]
    Id,
    Username,
    Age,
    TeamName,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Requested ordering for a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// A bounded window over an ordered result set
///
/// Page indexes are zero-based. The size is clamped into
/// `1..=MAX_PAGE_SIZE` at construction so repositories never see a
/// degenerate window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort: Sort::default(),
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Number of rows to skip before this window starts
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of results plus the total match count across all pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    total_elements: u64,
    page: u32,
    size: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, request: &PageRequest) -> Self {
        Self {
            content,
            total_elements,
            page: request.page(),
            size: request.size(),
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn total_pages(&self) -> u64 {
        if self.total_elements == 0 {
            0
        } else {
            self.total_elements.div_ceil(u64::from(self.size))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).size(), 1);
        assert_eq!(PageRequest::new(0, 1000).size(), MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, 20).size(), 20);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(0, 20).offset(), 0);
        assert_eq!(PageRequest::new(3, 25).offset(), 75);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let request = PageRequest::new(0, 10);

        assert_eq!(Page::<i32>::new(vec![], 0, &request).total_pages(), 0);
        assert_eq!(Page::<i32>::new(vec![], 10, &request).total_pages(), 1);
        assert_eq!(Page::<i32>::new(vec![], 11, &request).total_pages(), 2);
        assert_eq!(Page::<i32>::new(vec![], 30, &request).total_pages(), 3);
    }

    #[test]
    fn test_default_sort_is_id_ascending() {
        let sort = PageRequest::default().sort();
        assert_eq!(sort.field, SortField::Id);
        assert_eq!(sort.direction, SortDirection::Asc);
    }
}
