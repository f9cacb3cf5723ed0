use serde::{Deserialize, Serialize};

use crate::core::types::Group;

/// Aggregation regime selected from the shape of a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// One data point per entry.
    Flat,
    /// One aggregated data point per group.
    Grouped,
}

impl ProjectionMode {
    #[must_use]
    pub fn is_grouped(self) -> bool {
        self == Self::Grouped
    }
}

/// A single group without a key is indistinguishable from "no grouping" and
/// is projected flat; any other non-empty shape is grouped.
#[must_use]
pub fn detect_mode(groups: &[Group]) -> ProjectionMode {
    match groups {
        [] => ProjectionMode::Flat,
        [single] if !single.has_key() => ProjectionMode::Flat,
        _ => ProjectionMode::Grouped,
    }
}
