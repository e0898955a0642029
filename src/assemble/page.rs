//! Per-page assembly.

use crate::classify::{detect_chart_indicator, detect_financial_table, detect_headings};
use crate::images::ImageSink;
use crate::model::{ContentUnit, PageRecord, TableBlock, TextBlock};
use crate::options::ParseOptions;
use crate::section::SectionTracker;
use crate::source::DocumentSource;

/// Assemble one page: classified text lines first, then table blocks, then
/// the optional image list.
///
/// Text and table extraction failures are recovered here. The page record is
/// always produced; a failed feature is simply absent from it.
pub(crate) fn assemble_page<S: DocumentSource + ?Sized>(
    source: &S,
    number: u32,
    tracker: &mut SectionTracker,
    options: &ParseOptions,
    sink: Option<&dyn ImageSink>,
) -> PageRecord {
    let mut record = PageRecord::new(number);

    let text = match source.extract_text(number, options.tolerance) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("Failed to extract text from page {}: {}", number, e);
            None
        }
    };

    // Wholly empty text means "no text" and yields no blocks, but blank lines
    // inside non-empty text still become (unclassified) text blocks.
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        for line in text.split('\n') {
            let (section, subsection) = detect_headings(line);
            tracker.update(section, subsection);

            let (section, subsection) = tracker.snapshot();
            record.content.push(ContentUnit::Text(TextBlock {
                text: line.to_string(),
                section,
                subsection,
                is_financial_table: detect_financial_table(line),
                is_chart: detect_chart_indicator(line),
            }));
        }
    }

    match source.extract_tables(number) {
        Ok(tables) => {
            for (table_index, table_data) in tables.into_iter().enumerate() {
                let (section, subsection) = tracker.snapshot();
                record.content.push(ContentUnit::Table(TableBlock {
                    table_index,
                    table_data,
                    section,
                    subsection,
                }));
            }
        }
        Err(e) => {
            log::warn!("Failed to extract tables from page {}: {}", number, e);
        }
    }

    if let Some(sink) = sink {
        let saved = save_page_images(source, number, sink);
        if !saved.is_empty() {
            record.images = Some(saved);
        }
    }

    record
}

/// Save every image region on a page, skipping individual failures.
fn save_page_images<S: DocumentSource + ?Sized>(
    source: &S,
    number: u32,
    sink: &dyn ImageSink,
) -> Vec<String> {
    let mut saved = Vec::new();
    for (index, region) in source.page_images(number).iter().enumerate() {
        match sink.save(number, index, region) {
            Ok(path) => saved.push(path.to_string_lossy().into_owned()),
            Err(e) => {
                log::warn!("Error extracting image {} from page {}: {}", index, number, e);
            }
        }
    }
    saved
}
