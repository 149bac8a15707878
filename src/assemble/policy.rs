//! Row/image assignment policies.

use serde::{Deserialize, Serialize};

/// Strategy for pairing pool images with table data rows.
///
/// Which one is right depends on how reliable the source bbox data is:
/// `OrderedGreedy` tolerates imprecise (even whole-page fallback)
/// placements but assumes images and rows share a consistent top-to-bottom
/// order; `NearestNeighbor` requires trustworthy placements but survives
/// out-of-order pools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPolicy {
    /// Pop the topmost remaining image for each data row, in row order,
    /// regardless of exact geometric alignment.
    #[default]
    OrderedGreedy,

    /// Match each data row's primary cell to the pool image nearest its
    /// center, within the configured tolerances. Rows with no image in
    /// range get no icon.
    NearestNeighbor,
}

impl std::fmt::Display for AssignmentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentPolicy::OrderedGreedy => write!(f, "ordered-greedy"),
            AssignmentPolicy::NearestNeighbor => write!(f, "nearest-neighbor"),
        }
    }
}
