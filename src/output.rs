//! JSON serialization of the output record.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::DocumentRecord;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a document record to JSON.
pub fn to_json(doc: &DocumentRecord, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Serialize(format!("JSON serialization error: {}", e)))
}

/// Serialize a document record and write it to a file.
pub fn write_json<P: AsRef<Path>>(
    doc: &DocumentRecord,
    path: P,
    format: JsonFormat,
) -> Result<()> {
    let json = to_json(doc, format)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentUnit, PageRecord, TextBlock};

    fn sample_doc() -> DocumentRecord {
        let mut doc = DocumentRecord::new();
        let mut page = PageRecord::new(1);
        page.content.push(ContentUnit::Text(TextBlock {
            text: "TOTAL RETURN".to_string(),
            section: Some("TOTAL RETURN".to_string()),
            subsection: None,
            is_financial_table: true,
            is_chart: false,
        }));
        doc.add_page(page);
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_doc(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"pages\""));
        assert!(json.contains("TOTAL RETURN"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_doc(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_json(&sample_doc(), &path, JsonFormat::Pretty).unwrap();

        let back: DocumentRecord =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, sample_doc());
    }
}
