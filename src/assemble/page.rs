//! Page assembly.
//!
//! Combines reconstructed tables, standalone images, and text blocks into
//! one ordered [`PageFragment`]. Emission order is fixed: tables in
//! detection order, then standalone images that survive the dedup guard,
//! then text blocks split on blank lines.

use crate::model::{Block, ExtractedPage, PageFragment, TableFragment};

use super::options::AssembleOptions;
use super::pool::ImagePool;
use super::standalone::classify_standalone;
use super::table::TableReconstructor;

/// Assembles one extracted page into a page fragment.
pub struct PageAssembler<'a> {
    options: &'a AssembleOptions,
}

impl<'a> PageAssembler<'a> {
    /// Create an assembler with the given options.
    pub fn new(options: &'a AssembleOptions) -> Self {
        Self { options }
    }

    /// Assemble a page, consuming it.
    pub fn assemble(&self, page: ExtractedPage) -> PageFragment {
        let mut fragment = PageFragment::new(page.number);

        // One pool per page, threaded through the tables in detection
        // order; the classifier works on an unmodified snapshot.
        let reconstructor = TableReconstructor::new(self.options);
        let mut pool = ImagePool::new(page.images.clone());
        let mut tables: Vec<TableFragment> = Vec::with_capacity(page.tables.len());

        for grid in &page.tables {
            let (table, rest) = reconstructor.reconstruct(grid, pool);
            pool = rest;
            tables.push(table);
        }

        let standalone = classify_standalone(page.images, &page.tables);

        for table in tables {
            fragment.blocks.push(Block::Table(table));
        }

        // Dedup guard: drop standalone candidates whose payload is already
        // embedded as an icon in one of this page's tables. Covers the
        // deliberate disagreement between ordered-greedy consumption and
        // bbox containment.
        let embedded_in_table = |data: &[u8]| fragment.tables().any(|t| t.embeds_payload(data));
        let survivors: Vec<_> = standalone
            .into_iter()
            .filter(|img| !embedded_in_table(&img.data))
            .collect();
        for image in survivors {
            fragment.blocks.push(Block::Image(image));
        }

        if let Some(text) = &page.text {
            for block in split_text_blocks(text) {
                fragment.blocks.push(Block::Text(block));
            }
        }

        fragment
    }
}

/// Split page text into block-level units on blank-line boundaries,
/// trimming each block and dropping blank ones. Internal single line
/// breaks are preserved.
fn split_text_blocks(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
