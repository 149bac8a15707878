//! # docweave
//!
//! Reassembles semantically structured documents from the geometric output
//! of a page-layout extraction process.
//!
//! Layout extractors hand over text, detected table cell grids, and raster
//! images as independent per-page lists with nothing tying an image to the
//! table row it visually belongs to. This library does the reassociation
//! purely from bounding-box geometry: it assigns icons to table rows,
//! classifies the remaining images as standalone, and emits everything in
//! reading order as a self-contained HTML document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docweave::{JsonLayoutSource, assemble, render, AssembleOptions};
//!
//! fn main() -> docweave::Result<()> {
//!     let source = JsonLayoutSource::open("layout.json")?;
//!     let doc = assemble(&source, &AssembleOptions::default())?;
//!
//!     let html = render::to_html(&doc, &render::RenderOptions::default())?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Image-to-row association**: selectable policies (ordered-greedy or
//!   nearest-neighbor) for pairing icons with table data rows
//! - **Standalone classification**: images outside every table bbox are
//!   emitted as free page images
//! - **Self-contained output**: images embedded inline as data URIs
//! - **Best-effort degradation**: per-image problems become notices, not
//!   failures

pub mod assemble;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use assemble::{
    assemble, AssembleOptions, AssignmentPolicy, DocumentAssembler, ImagePool, PageAssembler,
    TableReconstructor,
};
pub use error::{Error, Result};
pub use extract::{DecodedImage, JsonLayoutSource, LayoutSource, PageLayout, PaintCommand};
pub use model::{
    Block, Document, ExtractedPage, ImageNotice, NoticeReason, PageFragment, PageImage, Point,
    Rect, TableCellFragment, TableFragment, TableGrid, TableRowFragment,
};
pub use render::{to_html, HtmlRenderer, RenderOptions};

use std::path::Path;

/// Convert a JSON layout dump to a self-contained HTML string.
///
/// The document title defaults to the input file name.
///
/// # Example
///
/// ```no_run
/// use docweave::convert_file;
///
/// let html = convert_file("layout.json").unwrap();
/// std::fs::write("output.html", html).unwrap();
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let title = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Converted Document".to_string());
    convert_file_with_options(
        path,
        &AssembleOptions::default(),
        &RenderOptions::default().with_title(title),
    )
}

/// Convert a JSON layout dump to HTML with custom options.
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    assemble_options: &AssembleOptions,
    render_options: &RenderOptions,
) -> Result<String> {
    let source = JsonLayoutSource::open(path)?;
    let doc = assemble(&source, assemble_options)?;
    render::to_html(&doc, render_options)
}

/// Convert a JSON layout dump from bytes to HTML.
pub fn convert_bytes(data: &[u8]) -> Result<String> {
    let source = JsonLayoutSource::from_bytes(data)?;
    let doc = assemble(&source, &AssembleOptions::default())?;
    render::to_html(&doc, &RenderOptions::default())
}

/// Builder for assembling and rendering layout dumps.
///
/// # Example
///
/// ```no_run
/// use docweave::{Docweave, AssignmentPolicy};
///
/// let html = Docweave::new()
///     .with_policy(AssignmentPolicy::NearestNeighbor)
///     .with_title("Service Overview")
///     .convert("layout.json")?;
/// # Ok::<(), docweave::Error>(())
/// ```
pub struct Docweave {
    assemble_options: AssembleOptions,
    render_options: RenderOptions,
}

impl Docweave {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            assemble_options: AssembleOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the assignment policy.
    pub fn with_policy(mut self, policy: AssignmentPolicy) -> Self {
        self.assemble_options = self.assemble_options.with_policy(policy);
        self
    }

    /// Set the matching tolerances.
    pub fn with_tolerances(mut self, x_tolerance: f32, y_tolerance: f32) -> Self {
        self.assemble_options = self.assemble_options.with_tolerances(x_tolerance, y_tolerance);
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Disable the embedded stylesheet.
    pub fn without_styles(mut self) -> Self {
        self.render_options = self.render_options.with_styles(false);
        self
    }

    /// Assemble a layout source into a document.
    pub fn assemble<S: LayoutSource>(&self, source: &S) -> Result<Document> {
        assemble(source, &self.assemble_options)
    }

    /// Render an assembled document.
    pub fn render(&self, doc: &Document) -> Result<String> {
        render::to_html(doc, &self.render_options)
    }

    /// Convert a JSON layout dump to HTML in one step.
    pub fn convert<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        convert_file_with_options(path, &self.assemble_options, &self.render_options)
    }
}

impl Default for Docweave {
    fn default() -> Self {
        Self::new()
    }
}
