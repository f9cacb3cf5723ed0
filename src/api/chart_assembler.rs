use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ProjectionMode, Projection, QueryResult, SeriesSpec, project};
use crate::render::{
    CategoryAxis, ChartDescription, Color, Dataset, PresentationOptions, ThemeColors, ValueAxis,
};

use super::LineChartViewConfig;

/// Line colors assigned round-robin by series index.
pub const LINE_COLORS: [Color; 8] = [
    Color::from_rgb8(0x8b, 0x5c, 0xf6),
    Color::from_rgb8(0x06, 0xb6, 0xd4),
    Color::from_rgb8(0xf5, 0x9e, 0x0b),
    Color::from_rgb8(0x10, 0xb9, 0x81),
    Color::from_rgb8(0xef, 0x44, 0x44),
    Color::from_rgb8(0xec, 0x48, 0x99),
    Color::from_rgb8(0x3b, 0x82, 0xf6),
    Color::from_rgb8(0x84, 0xcc, 0x16),
];

/// Alpha of the area fill under a line.
const FILL_ALPHA: f64 = 0x33 as f64 / 255.0;
const LINE_TENSION: f64 = 0.1;
const MAX_TICK_ROTATION_DEG: f64 = 45.0;

pub const GROUPED_X_AXIS_TITLE: &str = "Group";
pub const MULTI_SERIES_Y_AXIS_TITLE: &str = "Value";

/// Non-fatal conditions shown in place of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMessage {
    /// No plottable property is selected.
    MissingConfiguration,
    /// Every data point was dropped for lacking numeric values.
    EmptyProjection,
    /// The renderer could not acquire a drawing surface.
    RenderingContextUnavailable,
}

impl ViewMessage {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::MissingConfiguration => {
                "Please configure Y axis properties in the view options."
            }
            Self::EmptyProjection => {
                "No valid data points found. Ensure Y axis properties contain numeric values."
            }
            Self::RenderingContextUnavailable => "Failed to create canvas context.",
        }
    }
}

impl fmt::Display for ViewMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Everything one render pass needs before a drawing context is acquired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPlan {
    pub series: Vec<SeriesSpec>,
    pub projection: Projection,
    pub description: ChartDescription,
}

#[must_use]
pub fn palette_color(series_index: usize) -> Color {
    LINE_COLORS[series_index % LINE_COLORS.len()]
}

/// Series selected in `config`, in panel order, with colors and display names.
#[must_use]
pub fn resolve_series(config: &LineChartViewConfig) -> Vec<SeriesSpec> {
    config
        .series_properties()
        .enumerate()
        .map(|(index, property)| SeriesSpec {
            property: property.clone(),
            display_name: config.display_name(property),
            color: palette_color(index),
            aggregation: config.aggregation_method,
        })
        .collect()
}

/// Runs projection and assembly, or reports why no chart can be drawn.
pub fn plan_chart(
    result: &QueryResult,
    config: &LineChartViewConfig,
    theme: ThemeColors,
) -> Result<ChartPlan, ViewMessage> {
    let series = resolve_series(config);
    if series.is_empty() {
        debug!(selected = config.order.len(), "no plottable series selected");
        return Err(ViewMessage::MissingConfiguration);
    }

    let projection = project(result, &series, &config.label_property());
    if projection.is_empty() {
        return Err(ViewMessage::EmptyProjection);
    }

    let description = assemble_chart(&projection, &series, config, theme);
    Ok(ChartPlan {
        series,
        projection,
        description,
    })
}

/// Builds the declarative chart for already projected, ordered points.
#[must_use]
pub fn assemble_chart(
    projection: &Projection,
    series: &[SeriesSpec],
    config: &LineChartViewConfig,
    theme: ThemeColors,
) -> ChartDescription {
    let datasets = series
        .iter()
        .map(|spec| dataset_for(spec, projection, config))
        .collect();

    let x_title = match projection.mode {
        ProjectionMode::Grouped => GROUPED_X_AXIS_TITLE.to_owned(),
        ProjectionMode::Flat => config.display_name(&config.label_property()),
    };
    let y_title = match series {
        [single] => single.display_name.clone(),
        _ => MULTI_SERIES_Y_AXIS_TITLE.to_owned(),
    };

    ChartDescription {
        mode: projection.mode,
        categories: projection
            .points
            .iter()
            .map(|point| point.label.clone())
            .collect(),
        datasets,
        x_axis: CategoryAxis {
            title: x_title,
            ticks_visible: !projection.has_targets(),
            max_tick_rotation_deg: MAX_TICK_ROTATION_DEG,
        },
        y_axis: ValueAxis {
            title: y_title,
            min: config.y_min_bound(),
            max: config.y_max_bound(),
        },
        theme,
        presentation: PresentationOptions::default(),
    }
}

fn dataset_for(spec: &SeriesSpec, projection: &Projection, config: &LineChartViewConfig) -> Dataset {
    let (point_radius, point_hover_radius) = if config.show_points {
        (4.0, 6.0)
    } else {
        (0.0, 4.0)
    };
    Dataset {
        property: spec.property.clone(),
        label: spec.display_name.clone(),
        values: projection
            .points
            .iter()
            .map(|point| point.value(&spec.property))
            .collect(),
        border_color: spec.color,
        background_color: if config.fill_area {
            spec.color.with_alpha(FILL_ALPHA)
        } else {
            Color::TRANSPARENT
        },
        fill: config.fill_area,
        point_radius,
        point_hover_radius,
        tension: LINE_TENSION,
        span_gaps: true,
    }
}
