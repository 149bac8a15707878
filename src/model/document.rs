//! Assembled document tree.
//!
//! Assembly produces this structured tree; markup syntax is applied by a
//! separate rendering stage. The tree is append-only: each page fragment is
//! built once and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::PageImage;

/// A fully assembled document: page fragments in page order plus the
/// diagnostics collected along the way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Assembled pages, in source page order.
    pub pages: Vec<PageFragment>,

    /// Per-image notices accumulated during extraction and assembly.
    /// Notices never fail a run; they record best-effort degradation.
    pub notices: Vec<ImageNotice>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of assembled pages.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page fragment by its reported page number.
    pub fn get_page(&self, number: u32) -> Option<&PageFragment> {
        self.pages.iter().find(|p| p.number == number)
    }

    /// Append an assembled page.
    pub fn add_page(&mut self, page: PageFragment) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// One assembled page: reconstructed tables first, then standalone images,
/// then text blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFragment {
    /// Page number as reported by the extractor.
    pub number: u32,

    /// Page content in emission order.
    pub blocks: Vec<Block>,
}

impl PageFragment {
    /// Create an empty page fragment.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Tables on this page, in detection order.
    pub fn tables(&self) -> impl Iterator<Item = &TableFragment> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Standalone images on this page.
    pub fn standalone_images(&self) -> impl Iterator<Item = &PageImage> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Image(img) => Some(img),
            _ => None,
        })
    }

    /// Text blocks on this page.
    pub fn text_blocks(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Text(t) => Some(t.as_str()),
            _ => None,
        })
    }
}

/// A block-level unit on an assembled page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum Block {
    /// A reconstructed table.
    Table(TableFragment),

    /// A standalone image (not attributed to any table).
    Image(PageImage),

    /// A text block; internal line breaks are preserved.
    Text(String),
}

/// A reconstructed table: header first, then data rows in source order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableFragment {
    /// Rows in emission order.
    pub rows: Vec<TableRowFragment>,
}

impl TableFragment {
    /// Create an empty table fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn add_row(&mut self, row: TableRowFragment) {
        self.rows.push(row);
    }

    /// Check whether any cell in this table embeds the given payload.
    pub fn embeds_payload(&self, data: &[u8]) -> bool {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .any(|c| c.icon.as_ref().map_or(false, |img| img.data == data))
    }
}

/// A row in a reconstructed table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRowFragment {
    /// Cells in column order.
    pub cells: Vec<TableCellFragment>,

    /// Whether this is the header row.
    pub is_header: bool,
}

impl TableRowFragment {
    /// Create a data row.
    pub fn new(cells: Vec<TableCellFragment>) -> Self {
        Self {
            cells,
            is_header: false,
        }
    }

    /// Create the header row.
    pub fn header(cells: Vec<TableCellFragment>) -> Self {
        Self {
            cells,
            is_header: true,
        }
    }
}

/// A cell in a reconstructed table: optional text plus, for primary cells,
/// an optional associated icon image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCellFragment {
    /// Raw cell text, if any.
    pub text: Option<String>,

    /// Icon image consumed from the page pool, if one was assigned.
    pub icon: Option<PageImage>,
}

impl TableCellFragment {
    /// Create a text-only cell.
    pub fn text(text: Option<String>) -> Self {
        Self { text, icon: None }
    }

    /// Create a primary cell with an optional icon.
    pub fn with_icon(text: Option<String>, icon: Option<PageImage>) -> Self {
        Self { text, icon }
    }
}

/// A per-image diagnostic emitted when an image had to be skipped or
/// positioned by fallback. Aggregated on the [`Document`] instead of being
/// printed at the point of failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageNotice {
    /// Page the image belongs to.
    pub page: u32,

    /// Index of the image within the page's extraction order.
    pub image_index: usize,

    /// What happened.
    pub reason: NoticeReason,
}

/// Reason attached to an [`ImageNotice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoticeReason {
    /// The decoded payload was empty; the image was skipped.
    EmptyPayload,

    /// The format tag was blank or unusable; the image was skipped.
    UnknownFormat,

    /// No paint command matched; the whole-page fallback bbox was used.
    UnresolvedBounds,
}

impl std::fmt::Display for NoticeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeReason::EmptyPayload => write!(f, "empty image payload, skipped"),
            NoticeReason::UnknownFormat => write!(f, "unknown image format, skipped"),
            NoticeReason::UnresolvedBounds => {
                write!(f, "no placement found, whole-page bounds assumed")
            }
        }
    }
}
