//! Image placement resolution.
//!
//! Each decoded image gets a best-effort bounding box: the rectangle of the
//! page paint command whose fill reference matches the image's identity, or
//! the whole page rectangle when no command matches. The whole-page box is
//! an "unresolved position" sentinel; ordered-greedy row assignment still
//! works for such images, tight containment tests do not.

use log::warn;

use crate::model::{ImageNotice, NoticeReason, PageImage, Rect};

use super::{DecodedImage, PaintCommand};

/// Resolve placement rectangles for a page's decoded images.
///
/// Images with an empty payload or a blank format tag are skipped, not
/// errors; each skip and each fallback placement yields an [`ImageNotice`].
pub fn resolve_bounds(
    page_number: u32,
    images: Vec<DecodedImage>,
    drawings: &[PaintCommand],
    page_width: f32,
    page_height: f32,
) -> (Vec<PageImage>, Vec<ImageNotice>) {
    let mut placed = Vec::with_capacity(images.len());
    let mut notices = Vec::new();

    for (index, image) in images.into_iter().enumerate() {
        if image.data.is_empty() {
            warn!("page {page_number}: image {index} has an empty payload, skipping");
            notices.push(ImageNotice {
                page: page_number,
                image_index: index,
                reason: NoticeReason::EmptyPayload,
            });
            continue;
        }
        if image.format.trim().is_empty() {
            warn!("page {page_number}: image {index} has no format tag, skipping");
            notices.push(ImageNotice {
                page: page_number,
                image_index: index,
                reason: NoticeReason::UnknownFormat,
            });
            continue;
        }

        let bbox = match painted_rect(drawings, image.id) {
            Some(rect) => rect,
            None => {
                notices.push(ImageNotice {
                    page: page_number,
                    image_index: index,
                    reason: NoticeReason::UnresolvedBounds,
                });
                Rect::page(page_width, page_height)
            }
        };

        placed.push(PageImage::new(image.data, image.format, bbox));
    }

    (placed, notices)
}

/// Find the rectangle of the first paint command filled by the given image.
fn painted_rect(drawings: &[PaintCommand], image_id: u32) -> Option<Rect> {
    drawings
        .iter()
        .find(|d| d.fill_image == Some(image_id))
        .map(|d| d.rect)
}
