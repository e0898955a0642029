//! Parsing options and configuration.

use crate::source::Tolerance;
use std::path::PathBuf;

/// Options for a document-structure run.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Token-merge tolerances passed to the decode layer
    pub tolerance: Tolerance,

    /// Whether to extract and save page images
    pub extract_images: bool,

    /// Directory where extracted images are written
    pub image_dir: PathBuf,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable image extraction.
    pub fn with_images(mut self, extract: bool) -> Self {
        self.extract_images = extract;
        self
    }

    /// Set the image output directory.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = dir.into();
        self
    }

    /// Set the text-extraction tolerances.
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            extract_images: false,
            image_dir: PathBuf::from("extracted_images"),
        }
    }
}
