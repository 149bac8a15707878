//! Data model for document reassembly.
//!
//! Two sides live here: the *extracted* side (pages, table grids, placed
//! images — what the layout collaborator hands over) and the *assembled*
//! side (the document tree produced by reassembly, rendered separately).

mod document;
mod geometry;
mod image;
mod page;
mod table;

pub use document::{
    Block, Document, ImageNotice, NoticeReason, PageFragment, TableCellFragment, TableFragment,
    TableRowFragment,
};
pub use geometry::{Point, Rect};
pub use image::PageImage;
pub use page::ExtractedPage;
pub use table::TableGrid;
