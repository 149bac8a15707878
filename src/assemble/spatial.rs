//! Pure geometry predicates used for image/cell matching.
//!
//! Rectangle primitives (`center`, `contains`) live on
//! [`Rect`](crate::model::Rect); this module adds the matching predicates
//! built on top of them.

use crate::model::Point;

/// Default horizontal tolerance for icon/label matching, in page units.
/// Wider than the vertical tolerance: label rows are wider than tall.
pub const X_TOLERANCE: f32 = 50.0;

/// Default vertical tolerance for icon/label matching, in page units.
/// Icons sit at a roughly fixed vertical offset from the label baseline.
pub const Y_TOLERANCE: f32 = 30.0;

/// Euclidean distance between two centers.
pub fn distance(a: Point, b: Point) -> f32 {
    a.distance(b)
}

/// Whether two centers are near each other, with independent horizontal and
/// vertical tolerances. Both comparisons are strict.
pub fn is_near(a: Point, b: Point, x_tol: f32, y_tol: f32) -> bool {
    (a.x - b.x).abs() < x_tol && (a.y - b.y).abs() < y_tol
}

/// Index of the minimum-distance candidate center that also satisfies
/// [`is_near`]. Ties keep the first-encountered candidate. `None` when no
/// candidate is within tolerance — a normal outcome, not an error.
pub fn nearest_within_tolerance(
    target: Point,
    candidates: impl IntoIterator<Item = Point>,
    x_tol: f32,
    y_tol: f32,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;

    for (index, center) in candidates.into_iter().enumerate() {
        if !is_near(center, target, x_tol, y_tol) {
            continue;
        }
        let d = distance(center, target);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((index, d));
        }
    }

    best.map(|(index, _)| index)
}
