//! Pagination envelope shared by the list endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the paginated list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 1,
            per_page: 20,
            search: None,
        }
    }
}

impl PageRequest {
    pub fn with_search(search: impl Into<String>) -> Self {
        PageRequest {
            search: Some(search.into()),
            ..Default::default()
        }
    }
}

/// One page of a listed collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page as u64) as u32
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<u8> = Page {
            items: vec![],
            total: 41,
            page: 1,
            per_page: 20,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(!page.is_last());
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let page: Page<u8> = Page {
            items: vec![],
            total: 0,
            page: 1,
            per_page: 20,
        };
        assert_eq!(page.total_pages(), 0);
        assert!(page.is_last());
    }
}
