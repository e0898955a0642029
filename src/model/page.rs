//! Page-level record types.

use serde::{Deserialize, Serialize};

/// A raw table grid: ordered rows of optional-string cells.
///
/// Rows may be ragged and a cell may be absent, reproducing the decode
/// layer's tolerance for irregular extracted tables.
pub type TableGrid = Vec<Vec<Option<String>>>;

/// One page of the reconstructed document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageRecord {
    /// Page number (1-indexed, contiguous in decode order)
    pub number: u32,

    /// Content units: text blocks in line order, then table blocks in
    /// extraction order
    pub content: Vec<ContentUnit>,

    /// Paths of images saved from this page. Omitted (not an empty list)
    /// when image extraction is disabled or nothing was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl PageRecord {
    /// Create an empty page record.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            content: Vec::new(),
            images: None,
        }
    }

    /// Check if the page has no content units.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the number of content units on the page.
    pub fn unit_count(&self) -> usize {
        self.content.len()
    }
}

/// A single content unit on a page.
///
/// Untagged: the serialized form carries no discriminator, matching the
/// output artifact. The variants deserialize unambiguously because their
/// field sets are disjoint (`text` vs `table_index`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ContentUnit {
    /// A line of text with classification flags
    Text(TextBlock),

    /// An extracted table grid
    Table(TableBlock),
}

impl ContentUnit {
    /// Check if this unit is a text block.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentUnit::Text(_))
    }

    /// Check if this unit is a table block.
    pub fn is_table(&self) -> bool {
        matches!(self, ContentUnit::Table(_))
    }

    /// The section snapshot attached to this unit.
    pub fn section(&self) -> Option<&str> {
        match self {
            ContentUnit::Text(t) => t.section.as_deref(),
            ContentUnit::Table(t) => t.section.as_deref(),
        }
    }

    /// The subsection snapshot attached to this unit.
    pub fn subsection(&self) -> Option<&str> {
        match self {
            ContentUnit::Text(t) => t.subsection.as_deref(),
            ContentUnit::Table(t) => t.subsection.as_deref(),
        }
    }
}

/// One line of extracted text, annotated with its enclosing section state
/// and classifier flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextBlock {
    /// The raw line text
    pub text: String,

    /// Section active when this line was processed
    pub section: Option<String>,

    /// Subsection active when this line was processed
    pub subsection: Option<String>,

    /// Whether the line looks like part of a financial table
    pub is_financial_table: bool,

    /// Whether the line references a chart or figure
    pub is_chart: bool,
}

/// One extracted table grid, annotated with the section state in effect
/// after all of the page's text lines were processed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableBlock {
    /// 0-based index of the table within its page
    pub table_index: usize,

    /// The raw grid
    pub table_data: TableGrid,

    /// Section active when this table was recorded
    pub section: Option<String>,

    /// Subsection active when this table was recorded
    pub subsection: Option<String>,
}
