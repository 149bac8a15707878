//! Layout extraction boundary.
//!
//! Provides a trait-based interface for the page-layout extraction
//! collaborator, isolating the concrete extractor (PDF library, layout
//! dump, test fixture) from the assembly logic. The collaborator reports
//! raw decoded images and the page's paint commands; resolving each image's
//! placement rectangle happens here, in [`resolve_bounds`].

mod bounds;
mod json;

pub use bounds::resolve_bounds;
pub use json::JsonLayoutSource;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{ExtractedPage, ImageNotice, Rect, TableGrid};

/// A raster image as decoded by the extractor, before placement resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedImage {
    /// Extractor-side identity (e.g. a PDF xref number).
    pub id: u32,

    /// Encoded image bytes.
    #[serde(with = "decoded_bytes")]
    pub data: Vec<u8>,

    /// Format tag (e.g. "png", "jpeg").
    pub format: String,
}

mod decoded_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

/// A page drawing command that may place an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaintCommand {
    /// Painted rectangle in page coordinates.
    pub rect: Rect,

    /// Identity of the image filling this rectangle, if any.
    pub fill_image: Option<u32>,
}

/// Raw per-page output of the layout extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    /// Page number as reported by the extractor (1-based by convention).
    pub number: u32,

    /// Page width in page units.
    pub width: f32,

    /// Page height in page units.
    pub height: f32,

    /// Plain text content, if any.
    pub text: Option<String>,

    /// Detected tables, in detection order.
    #[serde(default)]
    pub tables: Vec<TableGrid>,

    /// Decoded raster images, in extraction order.
    #[serde(default)]
    pub images: Vec<DecodedImage>,

    /// Page drawing commands, used to resolve image placements.
    #[serde(default)]
    pub drawings: Vec<PaintCommand>,
}

/// Abstract interface to the page-layout extraction collaborator.
///
/// Implementations enumerate pages and hand over each page's raw layout.
/// A failure from either method is document-level: the whole conversion
/// fails atomically, no partial document is produced.
pub trait LayoutSource {
    /// Number of pages available.
    fn page_count(&self) -> Result<u32>;

    /// Load the raw layout of one page (1-based index into the source's
    /// own page order).
    fn load_page(&self, number: u32) -> Result<PageLayout>;
}

/// Resolve a raw page layout into an [`ExtractedPage`], placing each image
/// and collecting per-image notices.
pub fn resolve_page(layout: PageLayout) -> (ExtractedPage, Vec<ImageNotice>) {
    let PageLayout {
        number,
        width,
        height,
        text,
        tables,
        images,
        drawings,
    } = layout;

    let (images, notices) = resolve_bounds(number, images, &drawings, width, height);

    let page = ExtractedPage {
        number,
        width,
        height,
        text,
        tables,
        images,
    };
    (page, notices)
}
