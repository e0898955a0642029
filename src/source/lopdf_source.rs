//! lopdf-backed document source.

use std::path::Path;

use lopdf::Document as LopdfDocument;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::TableGrid;

use super::detect::detect_format_from_path;
use super::{DocumentSource, ImageRegion, Tolerance};

/// Minimum consecutive multi-cell rows required to form a table grid.
const MIN_GRID_ROWS: usize = 2;

/// A PDF document opened through lopdf.
pub struct LopdfSource {
    doc: LopdfDocument,
}

impl LopdfSource {
    /// Open a PDF file.
    ///
    /// Fatal: fails with `UnknownFormat` when the header is not a PDF,
    /// `Encrypted` for encrypted documents, or `Open` when lopdf cannot
    /// decode the structure.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_document(doc)
    }

    /// Open a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_document(doc)
    }

    fn from_document(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// Get the PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Extract the image XObjects referenced by one page.
    fn page_xobjects(&self, page: u32) -> Vec<ImageRegion> {
        let mut regions = Vec::new();

        let pages = self.doc.get_pages();
        let Some(page_id) = pages.get(&page).copied() else {
            return regions;
        };
        let Ok(page_dict) = self.doc.get_dictionary(page_id) else {
            return regions;
        };
        let Ok(res) = page_dict.get(b"Resources") else {
            return regions;
        };
        let res_dict = match res {
            lopdf::Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
            lopdf::Object::Dictionary(d) => Some(d),
            _ => None,
        };
        let Some(res_dict) = res_dict else {
            return regions;
        };
        let Ok(xobjects) = res_dict.get(b"XObject") else {
            return regions;
        };
        let xobj_dict = match xobjects {
            lopdf::Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
            lopdf::Object::Dictionary(d) => Some(d),
            _ => None,
        };
        let Some(xobj_dict) = xobj_dict else {
            return regions;
        };

        for (name, obj) in xobj_dict.iter() {
            let Ok(obj_ref) = obj.as_reference() else {
                continue;
            };
            match self.image_region(obj_ref) {
                Ok(Some(region)) => regions.push(region),
                Ok(None) => {}
                Err(e) => {
                    log::debug!(
                        "Skipping XObject {} on page {}: {}",
                        String::from_utf8_lossy(name),
                        page,
                        e
                    );
                }
            }
        }

        regions
    }

    /// Build an image region from an XObject, or `None` for non-image
    /// XObjects (forms, etc.).
    fn image_region(&self, obj_ref: lopdf::ObjectId) -> Result<Option<ImageRegion>> {
        let object = self
            .doc
            .get_object(obj_ref)
            .map_err(|e| Error::ImageExtract(e.to_string()))?;

        let lopdf::Object::Stream(stream) = object else {
            return Err(Error::ImageExtract("XObject is not a stream".to_string()));
        };

        let dict = &stream.dict;
        match dict.get(b"Subtype").and_then(|s| s.as_name_str()) {
            Ok("Image") => {}
            _ => return Ok(None),
        }

        let width = dict
            .get(b"Width")
            .ok()
            .and_then(|w| w.as_i64().ok())
            .unwrap_or(0) as f32;
        let height = dict
            .get(b"Height")
            .ok()
            .and_then(|h| h.as_i64().ok())
            .unwrap_or(0) as f32;

        let filter = dict
            .get(b"Filter")
            .ok()
            .and_then(|f| f.as_name_str().ok())
            .unwrap_or("");

        // JPEG streams can be written out verbatim; everything else is
        // saved in its decompressed form.
        let data = match filter {
            "DCTDecode" | "JPXDecode" => stream.content.clone(),
            _ => stream
                .decompressed_content()
                .unwrap_or_else(|_| stream.content.clone()),
        };

        Ok(Some(ImageRegion {
            x0: 0.0,
            top: 0.0,
            x1: width,
            bottom: height,
            data,
        }))
    }
}

impl DocumentSource for LopdfSource {
    fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    // lopdf performs its own token merging, so the tolerances are accepted
    // for the contract but not consumed here.
    fn extract_text(&self, page: u32, _tolerance: Tolerance) -> Result<String> {
        self.doc
            .extract_text(&[page])
            .map_err(|e| Error::TextExtract(format!("page {}: {}", page, e)))
    }

    fn extract_tables(&self, page: u32) -> Result<Vec<TableGrid>> {
        let text = self
            .doc
            .extract_text(&[page])
            .map_err(|e| Error::TableExtract(format!("page {}: {}", page, e)))?;
        Ok(detect_grids(&text))
    }

    fn page_images(&self, page: u32) -> Vec<ImageRegion> {
        self.page_xobjects(page)
    }
}

/// Find table-like grids in extracted text.
///
/// A row is any line whose content splits into two or more cells on tab
/// characters or runs of two or more spaces; two or more consecutive rows
/// form a grid. Empty cells become `None`.
fn detect_grids(text: &str) -> Vec<TableGrid> {
    let splitter = Regex::new(r"\t+| {2,}").unwrap();

    let mut grids = Vec::new();
    let mut current: TableGrid = Vec::new();

    for line in text.lines() {
        match split_row(line, &splitter) {
            Some(cells) => current.push(cells),
            None => flush_grid(&mut current, &mut grids),
        }
    }
    flush_grid(&mut current, &mut grids);

    grids
}

/// Split one line into cells, or `None` if the line is not row-like.
fn split_row(line: &str, splitter: &Regex) -> Option<Vec<Option<String>>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let cells: Vec<&str> = splitter.split(trimmed).collect();
    if cells.len() < 2 {
        return None;
    }

    Some(
        cells
            .into_iter()
            .map(|c| {
                let c = c.trim();
                if c.is_empty() {
                    None
                } else {
                    Some(c.to_string())
                }
            })
            .collect(),
    )
}

fn flush_grid(current: &mut TableGrid, grids: &mut Vec<TableGrid>) {
    if current.len() >= MIN_GRID_ROWS {
        grids.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(LopdfSource::from_bytes(b"not a pdf").is_err());
        assert!(LopdfSource::from_bytes(b"").is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let result = LopdfSource::open("does/not/exist.pdf");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_detect_grids_basic() {
        let text = "Fund performance overview\n\
                    Fund  1Y  3Y\n\
                    Alpha  4.2%  9.1%\n\
                    Beta  1.0%  3.3%\n\
                    Closing commentary";
        let grids = detect_grids(text);
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].len(), 3);
        assert_eq!(grids[0][0][0].as_deref(), Some("Fund"));
        assert_eq!(grids[0][1][1].as_deref(), Some("4.2%"));
    }

    #[test]
    fn test_detect_grids_single_row_is_not_a_table() {
        let text = "prose line\nName  Value\nmore prose";
        assert!(detect_grids(text).is_empty());
    }

    #[test]
    fn test_detect_grids_separate_blocks() {
        let text = "A  B\nC  D\n\nplain\n\nE\tF\nG\tH";
        let grids = detect_grids(text);
        assert_eq!(grids.len(), 2);
    }

    #[test]
    fn test_split_row_single_spaces_stay_joined() {
        let splitter = Regex::new(r"\t+| {2,}").unwrap();
        assert!(split_row("one two three", &splitter).is_none());
        let cells = split_row("left part  right part", &splitter).unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].as_deref(), Some("left part"));
    }
}
