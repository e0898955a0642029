//! Document and page assembly.
//!
//! The document assembler walks pages strictly in order, sharing one
//! [`SectionTracker`](crate::section::SectionTracker) across all of them so
//! that a heading detected on one page stays active on the next. Pages are
//! never processed in parallel: the tracker's correctness depends on lines
//! being observed in true document order.

mod document;
mod page;

pub use document::DocumentAssembler;
pub(crate) use page::assemble_page;
