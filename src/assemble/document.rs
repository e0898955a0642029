//! Document-level assembly.

use crate::error::Result;
use crate::images::{FsImageSink, ImageSink};
use crate::model::DocumentRecord;
use crate::options::ParseOptions;
use crate::section::SectionTracker;
use crate::source::DocumentSource;

use super::assemble_page;

/// Drives page assembly over an opened document source.
///
/// Owns the section tracker for the run, so repeated `assemble` calls on the
/// same assembler are independent of each other.
pub struct DocumentAssembler {
    options: ParseOptions,
}

impl DocumentAssembler {
    /// Create an assembler with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Create an assembler with default options.
    pub fn with_defaults() -> Self {
        Self::new(ParseOptions::default())
    }

    /// Assemble the full document record from an opened source.
    ///
    /// Produces exactly one page record per page, in order, numbered from 1.
    /// The only error paths are setting up the image output directory;
    /// per-page extraction failures are recovered inside page assembly.
    pub fn assemble<S: DocumentSource + ?Sized>(&self, source: &S) -> Result<DocumentRecord> {
        let sink = if self.options.extract_images {
            Some(FsImageSink::create(&self.options.image_dir)?)
        } else {
            None
        };
        self.assemble_with_sink(source, sink.as_ref().map(|s| s as &dyn ImageSink))
    }

    /// Assemble with a caller-provided image sink (or none).
    pub fn assemble_with_sink<S: DocumentSource + ?Sized>(
        &self,
        source: &S,
        sink: Option<&dyn ImageSink>,
    ) -> Result<DocumentRecord> {
        let total = source.page_count();
        let mut tracker = SectionTracker::new();
        let mut document = DocumentRecord::new();

        for number in 1..=total {
            log::info!("Processing page {}/{}", number, total);
            let page = assemble_page(source, number, &mut tracker, &self.options, sink);
            document.add_page(page);
        }

        Ok(document)
    }
}
