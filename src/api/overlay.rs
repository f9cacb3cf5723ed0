use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DataPoint, NavigationTarget, Rect};
use crate::render::ChartHandle;

/// Clickable category label drawn over the chart's horizontal axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayLabel {
    pub index: usize,
    /// Horizontal offset relative to the container's left edge.
    pub left_px: f64,
    pub text: String,
    /// `None` renders plain text.
    pub target: Option<NavigationTarget>,
}

impl OverlayLabel {
    #[must_use]
    pub fn is_link(&self) -> bool {
        self.target.is_some()
    }
}

/// Places one overlay label per point against the chart's live scale.
///
/// Returns `None` when no point carries a navigation target: the chart's own
/// tick labels are shown instead.
#[must_use]
pub fn sync_overlay<C: ChartHandle + ?Sized>(
    points: &[DataPoint],
    chart: &C,
    container: Rect,
) -> Option<Vec<OverlayLabel>> {
    if !points.iter().any(|point| point.target.is_some()) {
        return None;
    }

    let canvas_offset_left = chart.canvas_bounds().left - container.left;
    let mut labels = Vec::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        let Some(x) = chart.x_pixel_for_index(index) else {
            trace!(index, "scale has no position for category");
            continue;
        };
        labels.push(OverlayLabel {
            index,
            left_px: canvas_offset_left + x,
            text: point.label.clone(),
            target: point.target.clone(),
        });
    }
    Some(labels)
}
