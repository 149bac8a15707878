//! Standalone image classification.

use crate::model::{PageImage, TableGrid};

/// Partition a page's images into those claimed by some table and those
/// standing alone, by testing each image's center against every table bbox.
///
/// The test is deliberately independent of which images the reconstruction
/// actually consumed: an image popped by ordered-greedy assignment may lie
/// outside every table bbox, and a contained image may have survived an
/// exhausted queue. Reconciling the two views is the page assembler's
/// dedup guard, not this classifier's job.
pub fn classify_standalone(images: Vec<PageImage>, tables: &[TableGrid]) -> Vec<PageImage> {
    images
        .into_iter()
        .filter(|image| !tables.iter().any(|t| t.bbox.contains(image.center())))
        .collect()
}
