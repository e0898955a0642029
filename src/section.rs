//! Section state tracking.

/// Tracks the section and subsection currently in effect while scanning a
/// document's lines in order.
///
/// One tracker lives for the duration of one document run and is threaded by
/// mutable reference through every page, so headings carry across page
/// boundaries. A new section heading replaces the current section but leaves
/// the current subsection in place; a new subsection replaces only the
/// subsection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTracker {
    current_section: Option<String>,
    current_subsection: Option<String>,
}

impl SectionTracker {
    /// Create a tracker with no active section or subsection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply heading-detection results. Each field updates independently and
    /// unconditionally when present; `(None, None)` is a no-op.
    pub fn update(&mut self, section: Option<String>, subsection: Option<String>) {
        if let Some(section) = section {
            self.current_section = Some(section);
        }
        if let Some(subsection) = subsection {
            self.current_subsection = Some(subsection);
        }
    }

    /// Read the current state without mutating it.
    pub fn snapshot(&self) -> (Option<String>, Option<String>) {
        (
            self.current_section.clone(),
            self.current_subsection.clone(),
        )
    }
}
