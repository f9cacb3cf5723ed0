use serde::{Deserialize, Serialize};

use crate::core::{PropertyId, ProjectionMode};
use crate::render::Color;

/// Theme colors provided by the host. Opaque to the projection logic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub text: Color,
    pub grid: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            text: Color::from_rgb8(0x66, 0x66, 0x66),
            grid: Color::from_rgb8(0xe0, 0xe0, 0xe0),
        }
    }
}

/// One plotted line, aligned positionally with the chart categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub property: PropertyId,
    pub label: String,
    /// `None` marks a gap the renderer may skip or bridge.
    pub values: Vec<Option<f64>>,
    pub border_color: Color,
    pub background_color: Color,
    pub fill: bool,
    pub point_radius: f64,
    pub point_hover_radius: f64,
    pub tension: f64,
    pub span_gaps: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub title: String,
    /// Hidden when clickable overlay labels replace the tick labels.
    pub ticks_visible: bool,
    pub max_tick_rotation_deg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub title: String,
    /// `None` lets the renderer autoscale that side.
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// Interaction, legend and tooltip settings passed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentationOptions {
    pub legend_visible: bool,
    pub legend_position: LegendPosition,
    pub legend_point_style: bool,
    pub tooltip_enabled: bool,
    /// Hit testing resolves the nearest category without requiring the
    /// pointer to intersect a point.
    pub intersect: bool,
    pub animated: bool,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            legend_visible: true,
            legend_position: LegendPosition::Top,
            legend_point_style: true,
            tooltip_enabled: true,
            intersect: false,
            animated: false,
        }
    }
}

/// Declarative description of one line chart render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescription {
    pub mode: ProjectionMode,
    pub categories: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub x_axis: CategoryAxis,
    pub y_axis: ValueAxis,
    pub theme: ThemeColors,
    pub presentation: PresentationOptions,
}

impl ChartDescription {
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Finite values across every dataset.
    pub fn plotted_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.datasets
            .iter()
            .flat_map(|dataset| dataset.values.iter().copied().flatten())
    }
}
