//! Page envelope returned by paginated endpoints

use serde::{Deserialize, Serialize};

use crate::domain::page::Page;

/// One page of results plus pagination bookkeeping
///
/// `number` is the zero-based index of this page; `totalElements` counts
/// matches across all pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub size: u32,
    pub number: u32,
}

impl<T> PageResponse<T> {
    /// Build the envelope from a domain page, mapping each row to its DTO
    pub fn from_page<U>(page: Page<U>, map: impl FnMut(U) -> T) -> Self {
        let total_elements = page.total_elements();
        let total_pages = page.total_pages();
        let size = page.size();
        let number = page.page();

        Self {
            content: page.into_content().into_iter().map(map).collect(),
            total_elements,
            total_pages,
            size,
            number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::PageRequest;

    #[test]
    fn test_envelope_field_names() {
        let page = Page::new(vec![1, 2], 5, &PageRequest::new(1, 2));
        let response = PageResponse::from_page(page, |n| n * 10);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["content"], serde_json::json!([10, 20]));
        assert_eq!(json["totalElements"], 5);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["size"], 2);
        assert_eq!(json["number"], 1);
    }
}
