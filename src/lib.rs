//! # docstruct
//!
//! Reconstructs logical document structure from PDF pages.
//!
//! The pipeline takes the flat per-page stream produced by a PDF decode
//! layer (text lines, table grids, image regions) and rebuilds a structured,
//! serializable document model: every text line and table is annotated with
//! the section and subsection in effect where it appeared, plus semantic
//! hints (financial-table-like, chart reference).
//!
//! ## Quick Start
//!
//! ```no_run
//! use docstruct::{output, parse_file, JsonFormat};
//!
//! fn main() -> docstruct::Result<()> {
//!     let doc = parse_file("factsheet.pdf")?;
//!     println!("Pages: {}", doc.page_count());
//!
//!     output::write_json(&doc, "factsheet.json", JsonFormat::Pretty)?;
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! - **Classification** is heuristic and line-oriented: short all-uppercase
//!   lines open a section, short lines ending in `:` open a subsection,
//!   keyword/number matching flags financial-table and chart lines.
//! - **Section state** lives in one [`SectionTracker`] per run, threaded
//!   through every page in document order, so headings carry across pages.
//! - **Failure recovery** is per feature and per page: a page whose text or
//!   tables cannot be extracted still appears in the output with whatever
//!   was recovered. Only a failure to open the document is fatal.

pub mod assemble;
pub mod classify;
pub mod error;
pub mod images;
pub mod model;
pub mod options;
pub mod output;
pub mod section;
pub mod source;

// Re-export commonly used types
pub use assemble::DocumentAssembler;
pub use error::{Error, Result};
pub use images::{FsImageSink, ImageSink};
pub use model::{ContentUnit, DocumentRecord, PageRecord, TableBlock, TableGrid, TextBlock};
pub use options::ParseOptions;
pub use output::JsonFormat;
pub use section::SectionTracker;
pub use source::{DocumentSource, ImageRegion, LopdfSource, Tolerance};

use std::path::Path;

/// Parse a PDF file and return the reconstructed document record.
///
/// # Example
///
/// ```no_run
/// use docstruct::parse_file;
///
/// let doc = parse_file("document.pdf").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<DocumentRecord> {
    parse_file_with_options(path, ParseOptions::default())
}

/// Parse a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use docstruct::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_images(true)
///     .with_image_dir("./images");
/// let doc = parse_file_with_options("document.pdf", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<DocumentRecord> {
    let source = LopdfSource::open(path)?;
    DocumentAssembler::new(options).assemble(&source)
}

/// Parse a PDF from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<DocumentRecord> {
    parse_bytes_with_options(data, ParseOptions::default())
}

/// Parse a PDF from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<DocumentRecord> {
    let source = LopdfSource::from_bytes(data)?;
    DocumentAssembler::new(options).assemble(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bytes_empty_data() {
        let data: [u8; 0] = [];
        assert!(parse_bytes(&data).is_err());
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        let data = b"<!DOCTYPE html><html></html>";
        assert!(parse_bytes(data).is_err());
    }

    #[test]
    fn test_parse_file_missing_path() {
        // Fatal open failure surfaces as an explicit error, never as an
        // empty success record.
        let result = parse_file("no/such/file.pdf");
        assert!(result.is_err());
    }
}
