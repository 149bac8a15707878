//! Document reassembly engine.
//!
//! Drives the layout source page by page, strictly in sequence, and builds
//! the assembled [`Document`] tree: per page, reconstructed tables first,
//! then standalone images, then text blocks. A page-level extraction
//! failure aborts the whole run; per-image problems become notices on the
//! document.

mod options;
mod page;
mod policy;
mod pool;
pub mod spatial;
mod standalone;
mod table;

pub use options::AssembleOptions;
pub use page::PageAssembler;
pub use policy::AssignmentPolicy;
pub use pool::ImagePool;
pub use standalone::classify_standalone;
pub use table::TableReconstructor;

use log::debug;

use crate::error::Result;
use crate::extract::{resolve_page, LayoutSource};
use crate::model::Document;

/// Assembles whole documents from a layout source.
pub struct DocumentAssembler {
    options: AssembleOptions,
}

impl DocumentAssembler {
    /// Create an assembler with the given options.
    pub fn new(options: AssembleOptions) -> Self {
        Self { options }
    }

    /// Assemble every page of the source into a document.
    ///
    /// Pages are processed in order with no shared state between them; any
    /// failure to load a page fails the whole run with no partial result.
    pub fn assemble<S: LayoutSource>(&self, source: &S) -> Result<Document> {
        let page_count = source.page_count()?;
        let mut document = Document::new();
        let page_assembler = PageAssembler::new(&self.options);

        for number in 1..=page_count {
            let layout = source.load_page(number)?;
            let (page, notices) = resolve_page(layout);
            debug!(
                "page {number}: {} tables, {} images, {} notices",
                page.tables.len(),
                page.images.len(),
                notices.len()
            );
            document.notices.extend(notices);
            document.add_page(page_assembler.assemble(page));
        }

        Ok(document)
    }
}

impl Default for DocumentAssembler {
    fn default() -> Self {
        Self::new(AssembleOptions::default())
    }
}

/// Assemble a document with the given options.
pub fn assemble<S: LayoutSource>(source: &S, options: &AssembleOptions) -> Result<Document> {
    DocumentAssembler::new(options.clone()).assemble(source)
}
