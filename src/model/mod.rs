//! Output record types.
//!
//! These types mirror the serialized artifact exactly: a document is a list
//! of page records, each holding an ordered content stream of text and table
//! units plus an optional list of saved image paths. Field presence is part
//! of the contract — the `images` key is omitted entirely when no image was
//! saved, and `section`/`subsection` serialize as explicit nulls when unset.

mod document;
mod page;

pub use document::DocumentRecord;
pub use page::{ContentUnit, PageRecord, TableBlock, TableGrid, TextBlock};
