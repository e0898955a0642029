//! Decode-layer contract and backends.
//!
//! The assembly pipeline consumes a [`DocumentSource`]: something that was
//! opened successfully and can produce, per page, raw text, raw table grids,
//! and image regions. Opening is the only fatal boundary; every per-page
//! method may fail without aborting the document run.

mod detect;
mod lopdf_source;

pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use lopdf_source::LopdfSource;

use crate::error::Result;

/// Token-merge tolerances for text extraction, in page units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Horizontal merge tolerance
    pub x: f32,
    /// Vertical merge tolerance
    pub y: f32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { x: 2.0, y: 2.0 }
    }
}

/// An image region on a page: pixel bounding box plus the raw image bytes.
#[derive(Debug, Clone)]
pub struct ImageRegion {
    /// Left edge of the bounding box
    pub x0: f32,
    /// Top edge of the bounding box
    pub top: f32,
    /// Right edge of the bounding box
    pub x1: f32,
    /// Bottom edge of the bounding box
    pub bottom: f32,
    /// Encoded image bytes
    pub data: Vec<u8>,
}

/// A decoded document that can be read page by page.
///
/// Pages are addressed by 1-based number, `1..=page_count()`, in document
/// order.
pub trait DocumentSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Extract the raw text of one page. An error here means "this page has
    /// no usable text", not a document failure.
    fn extract_text(&self, page: u32, tolerance: Tolerance) -> Result<String>;

    /// Extract the raw table grids of one page, in layout order.
    fn extract_tables(&self, page: u32) -> Result<Vec<crate::model::TableGrid>>;

    /// Enumerate the image regions of one page. Consumed only when image
    /// extraction is enabled.
    fn page_images(&self, page: u32) -> Vec<ImageRegion>;
}
