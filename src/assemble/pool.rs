//! Page image pool.
//!
//! A page's images are drained through an explicit queue value that moves
//! by ownership between the components consuming it, rather than a shared
//! list mutated in place. The queue is sorted once, ascending by vertical
//! bbox center — reading order top to bottom, independent of decode order.
//! The sort is stable, so images with equal vertical centers keep their
//! extraction order.

use std::collections::VecDeque;

use crate::model::{PageImage, Point};

use super::spatial;

/// An ordered queue of a page's images, awaiting assignment.
#[derive(Debug, Clone, Default)]
pub struct ImagePool {
    queue: VecDeque<PageImage>,
}

impl ImagePool {
    /// Build a pool from a page's images, sorted by vertical center.
    pub fn new(mut images: Vec<PageImage>) -> Self {
        images.sort_by(|a, b| {
            a.bbox
                .v_center()
                .partial_cmp(&b.bbox.v_center())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self {
            queue: images.into(),
        }
    }

    /// Pop the image with the smallest remaining vertical center.
    pub fn pop(&mut self) -> Option<PageImage> {
        self.queue.pop_front()
    }

    /// Remove and return the image nearest to `target` within the given
    /// tolerances, or `None` when nothing qualifies.
    pub fn take_nearest(&mut self, target: Point, x_tol: f32, y_tol: f32) -> Option<PageImage> {
        let index = spatial::nearest_within_tolerance(
            target,
            self.queue.iter().map(|img| img.center()),
            x_tol,
            y_tol,
        )?;
        self.queue.remove(index)
    }

    /// Number of images still awaiting assignment.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if the pool has been exhausted.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;

    fn image(tag: u8, y0: f32, y1: f32) -> PageImage {
        PageImage::new(vec![tag], "png", Rect::new(0.0, y0, 24.0, y1))
    }

    #[test]
    fn test_sorted_by_vertical_center() {
        let pool_input = vec![image(3, 200.0, 220.0), image(1, 10.0, 30.0), image(2, 90.0, 110.0)];
        let mut pool = ImagePool::new(pool_input);

        assert_eq!(pool.pop().unwrap().data, vec![1]);
        assert_eq!(pool.pop().unwrap().data, vec![2]);
        assert_eq!(pool.pop().unwrap().data, vec![3]);
        assert!(pool.pop().is_none());
    }

    #[test]
    fn test_equal_centers_keep_input_order() {
        let mut pool = ImagePool::new(vec![image(1, 50.0, 70.0), image(2, 50.0, 70.0)]);
        assert_eq!(pool.pop().unwrap().data, vec![1]);
        assert_eq!(pool.pop().unwrap().data, vec![2]);
    }

    #[test]
    fn test_take_nearest_removes_match() {
        let mut pool = ImagePool::new(vec![image(1, 10.0, 30.0), image(2, 100.0, 120.0)]);

        let taken = pool
            .take_nearest(Point::new(12.0, 115.0), 50.0, 30.0)
            .unwrap();
        assert_eq!(taken.data, vec![2]);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_take_nearest_none_leaves_pool_intact() {
        let mut pool = ImagePool::new(vec![image(1, 10.0, 30.0)]);
        assert!(pool
            .take_nearest(Point::new(500.0, 500.0), 50.0, 30.0)
            .is_none());
        assert_eq!(pool.len(), 1);
    }
}
