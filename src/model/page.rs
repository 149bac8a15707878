//! Extracted page content, as handed over by the layout collaborator.

use serde::{Deserialize, Serialize};

use super::{PageImage, TableGrid};

/// Everything extracted from a single source page, with image placements
/// already resolved.
///
/// Created once per page, consumed exactly once by page assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Page number as reported by the extractor (1-based by convention,
    /// not validated here).
    pub number: u32,

    /// Page width in page units.
    pub width: f32,

    /// Page height in page units.
    pub height: f32,

    /// Plain text content, if the page has any.
    pub text: Option<String>,

    /// Detected tables, in detection order.
    pub tables: Vec<TableGrid>,

    /// Placed images, in extraction order. This pool is private to the
    /// page: every image in it ends up either embedded in a table row or
    /// in the page's standalone set.
    pub images: Vec<PageImage>,
}

impl ExtractedPage {
    /// Create an empty page with the given number and dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            text: None,
            tables: Vec::new(),
            images: Vec::new(),
        }
    }

    /// Set the page text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add a detected table.
    pub fn add_table(&mut self, table: TableGrid) {
        self.tables.push(table);
    }

    /// Add a placed image.
    pub fn add_image(&mut self, image: PageImage) {
        self.images.push(image);
    }

    /// Check if the page carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, |t| t.trim().is_empty())
            && self.tables.is_empty()
            && self.images.is_empty()
    }
}
