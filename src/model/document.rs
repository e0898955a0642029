//! Document-level record type.

use super::PageRecord;
use serde::{Deserialize, Serialize};

/// The reconstructed document: one record per page, ordered by page number.
///
/// Every decoded page appears here, including pages whose extraction produced
/// no content (they carry an empty content list).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentRecord {
    /// Pages in document order, numbered 1..=N
    pub pages: Vec<PageRecord>,
}

impl DocumentRecord {
    /// Create a new empty document record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Option<&PageRecord> {
        if number == 0 {
            return None;
        }
        self.pages.get((number - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: PageRecord) {
        self.pages.push(page);
    }

    /// Total number of content units across all pages.
    pub fn total_units(&self) -> usize {
        self.pages.iter().map(|p| p.unit_count()).sum()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = DocumentRecord::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.total_units(), 0);
    }

    #[test]
    fn test_get_page_is_one_indexed() {
        let mut doc = DocumentRecord::new();
        doc.add_page(PageRecord::new(1));
        doc.add_page(PageRecord::new(2));

        assert!(doc.get_page(0).is_none());
        assert_eq!(doc.get_page(1).unwrap().number, 1);
        assert_eq!(doc.get_page(2).unwrap().number, 2);
        assert!(doc.get_page(3).is_none());
    }
}
