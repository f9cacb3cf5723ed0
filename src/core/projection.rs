use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::aggregation::{AggregationMethod, aggregate};
use crate::core::label::resolve_label;
use crate::core::mode::{ProjectionMode, detect_mode};
use crate::core::ordering::sort_data_points;
use crate::core::types::{Entry, Group, PropertyId, QueryResult};
use crate::core::value::{extract_number, extract_text, text_from_value};
use crate::render::Color;

/// Label used for a group without a key when the result is grouped.
pub const UNGROUPED_LABEL: &str = "Ungrouped";

/// Per-series values of one data point, in series order.
pub type SeriesValues = IndexMap<PropertyId, Option<f64>>;

/// One configured line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub property: PropertyId,
    pub display_name: String,
    pub color: Color,
    pub aggregation: AggregationMethod,
}

/// Where activating a data point should navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationTarget {
    /// Link parsed from a group key. Only produced by the grouped path.
    Link(String),
    /// Identity of the entry behind a point. Only produced by the flat path.
    Entry(String),
}

impl NavigationTarget {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Link(path) | Self::Entry(path) => path,
        }
    }
}

/// One plotted category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub values: SeriesValues,
    pub target: Option<NavigationTarget>,
}

impl DataPoint {
    #[must_use]
    pub fn value(&self, property: &PropertyId) -> Option<f64> {
        self.values.get(property).copied().flatten()
    }

    #[must_use]
    pub fn has_value(&self) -> bool {
        self.values.values().any(Option::is_some)
    }
}

/// Ordered data points of one render pass together with the regime that
/// produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub mode: ProjectionMode,
    pub points: Vec<DataPoint>,
}

impl Projection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|point| point.label.as_str()).collect()
    }

    #[must_use]
    pub fn has_targets(&self) -> bool {
        self.points.iter().any(|point| point.target.is_some())
    }
}

/// Projects `result` into sorted data points for `series`.
///
/// `label_property` is only consulted on the flat path.
#[must_use]
pub fn project(result: &QueryResult, series: &[SeriesSpec], label_property: &PropertyId) -> Projection {
    let mode = detect_mode(&result.groups);
    let mut points = match mode {
        ProjectionMode::Grouped => project_grouped(&result.groups, series),
        ProjectionMode::Flat => project_flat(&result.groups, series, label_property),
    };
    sort_data_points(&mut points);
    debug!(
        ?mode,
        groups = result.groups.len(),
        series = series.len(),
        points = points.len(),
        "projected query result"
    );
    Projection { mode, points }
}

/// Grouped path: one point per group, values aggregated per series.
#[must_use]
pub fn project_grouped(groups: &[Group], series: &[SeriesSpec]) -> Vec<DataPoint> {
    let mut points = Vec::with_capacity(groups.len());
    for group in groups {
        let raw_label = group
            .key
            .as_ref()
            .and_then(text_from_value)
            .unwrap_or_else(|| UNGROUPED_LABEL.to_owned());
        let resolved = resolve_label(&raw_label);

        let mut values = SeriesValues::with_capacity(series.len());
        let mut numbers = Vec::with_capacity(group.entries.len());
        for spec in series {
            numbers.clear();
            numbers.extend(
                group
                    .entries
                    .iter()
                    .filter_map(|entry| extract_number(entry, &spec.property)),
            );
            values.insert(spec.property.clone(), aggregate(&numbers, spec.aggregation));
        }

        let point = DataPoint {
            label: resolved.display_name,
            values,
            target: resolved.target.map(NavigationTarget::Link),
        };
        if point.has_value() {
            points.push(point);
        } else {
            trace!(label = %point.label, "dropping group without numeric values");
        }
    }
    points
}

/// Flat path: one point per entry across all groups, no aggregation.
#[must_use]
pub fn project_flat(
    groups: &[Group],
    series: &[SeriesSpec],
    label_property: &PropertyId,
) -> Vec<DataPoint> {
    let mut points = Vec::new();
    for entry in groups.iter().flat_map(|group| group.entries.iter()) {
        let point = flat_point(entry, series, label_property);
        if point.has_value() {
            points.push(point);
        } else {
            trace!(path = %entry.path, "dropping entry without numeric values");
        }
    }
    points
}

fn flat_point(entry: &Entry, series: &[SeriesSpec], label_property: &PropertyId) -> DataPoint {
    let label = extract_text(entry, label_property).unwrap_or_else(|| entry.name().to_owned());
    let values = series
        .iter()
        .map(|spec| (spec.property.clone(), extract_number(entry, &spec.property)))
        .collect();
    DataPoint {
        label,
        values,
        target: Some(NavigationTarget::Entry(entry.path.clone())),
    }
}
