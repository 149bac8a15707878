//! Assembly options.

use super::policy::AssignmentPolicy;
use super::spatial;

/// Options controlling document reassembly.
#[derive(Debug, Clone)]
pub struct AssembleOptions {
    /// How pool images are paired with table data rows.
    pub policy: AssignmentPolicy,

    /// Horizontal tolerance for nearest-neighbor matching, in page units.
    pub x_tolerance: f32,

    /// Vertical tolerance for nearest-neighbor matching, in page units.
    pub y_tolerance: f32,
}

impl AssembleOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the assignment policy.
    pub fn with_policy(mut self, policy: AssignmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the matching tolerances.
    pub fn with_tolerances(mut self, x_tolerance: f32, y_tolerance: f32) -> Self {
        self.x_tolerance = x_tolerance;
        self.y_tolerance = y_tolerance;
        self
    }
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            policy: AssignmentPolicy::default(),
            x_tolerance: spatial::X_TOLERANCE,
            y_tolerance: spatial::Y_TOLERANCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AssembleOptions::default();
        assert_eq!(options.policy, AssignmentPolicy::OrderedGreedy);
        assert_eq!(options.x_tolerance, 50.0);
        assert_eq!(options.y_tolerance, 30.0);
    }

    #[test]
    fn test_builder() {
        let options = AssembleOptions::new()
            .with_policy(AssignmentPolicy::NearestNeighbor)
            .with_tolerances(40.0, 20.0);
        assert_eq!(options.policy, AssignmentPolicy::NearestNeighbor);
        assert_eq!(options.x_tolerance, 40.0);
        assert_eq!(options.y_tolerance, 20.0);
    }
}
