//! Geometric primitives shared by the extraction and assembly layers.

use serde::{Deserialize, Serialize};

/// A point in page coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned bounding rectangle `(x0, y0, x1, y1)` in page coordinates.
///
/// `(x0, y0)` is the top-left corner, `(x1, y1)` the bottom-right, matching
/// the coordinate convention of the layout extractor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Full-page rectangle for the given page dimensions.
    pub fn page(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Rectangle width.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Rectangle height.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Midpoint of the rectangle.
    pub fn center(&self) -> Point {
        Point::new((self.x0 + self.x1) / 2.0, (self.y0 + self.y1) / 2.0)
    }

    /// Vertical midpoint, used for top-to-bottom reading order.
    pub fn v_center(&self) -> f32 {
        (self.y0 + self.y1) / 2.0
    }

    /// Point-in-rectangle test, inclusive of edges.
    pub fn contains(&self, point: Point) -> bool {
        self.x0 <= point.x && point.x <= self.x1 && self.y0 <= point.y && point.y <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let rect = Rect::new(10.0, 20.0, 30.0, 60.0);
        let c = rect.center();
        assert_eq!(c.x, 20.0);
        assert_eq!(c.y, 40.0);
        assert_eq!(rect.v_center(), 40.0);
    }

    #[test]
    fn test_dimensions() {
        let rect = Rect::new(5.0, 5.0, 15.0, 30.0);
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 25.0);
    }

    #[test]
    fn test_contains_inclusive_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(5.0, 5.0)));
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(!rect.contains(Point::new(10.1, 5.0)));
        assert!(!rect.contains(Point::new(5.0, -0.1)));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_page_rect() {
        let rect = Rect::page(612.0, 792.0);
        assert_eq!(rect.x0, 0.0);
        assert_eq!(rect.y0, 0.0);
        assert_eq!(rect.width(), 612.0);
        assert_eq!(rect.height(), 792.0);
    }
}
