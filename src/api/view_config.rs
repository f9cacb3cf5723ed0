use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AggregationMethod, PropertyId, parse_number_prefix};
use crate::error::{ChartError, ChartResult};

/// Property used for flat-mode category labels when none is configured.
pub const DEFAULT_LABEL_PROPERTY: &str = "file.name";

/// Per-view configuration as stored by the host.
///
/// Keys use the host's camelCase spelling so persisted view options load
/// without an ad-hoc mapping layer. `order` and `display_names` are owned by
/// the host's property panel and are read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChartViewConfig {
    #[serde(default)]
    pub x_axis_label_property: Option<PropertyId>,
    #[serde(default)]
    pub y_min: String,
    #[serde(default)]
    pub y_max: String,
    #[serde(default)]
    pub fill_area: bool,
    #[serde(default = "default_show_points")]
    pub show_points: bool,
    #[serde(default)]
    pub aggregation_method: AggregationMethod,
    /// Properties selected for display, in panel order.
    #[serde(default)]
    pub order: Vec<PropertyId>,
    /// User-renamed property labels.
    #[serde(default)]
    pub display_names: IndexMap<PropertyId, String>,
}

impl Default for LineChartViewConfig {
    fn default() -> Self {
        Self {
            x_axis_label_property: None,
            y_min: String::new(),
            y_max: String::new(),
            fill_area: false,
            show_points: default_show_points(),
            aggregation_method: AggregationMethod::default(),
            order: Vec::new(),
            display_names: IndexMap::new(),
        }
    }
}

impl LineChartViewConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property to the selection order.
    #[must_use]
    pub fn with_property(mut self, property: impl Into<PropertyId>) -> Self {
        self.order.push(property.into());
        self
    }

    #[must_use]
    pub fn with_display_name(
        mut self,
        property: impl Into<PropertyId>,
        display_name: impl Into<String>,
    ) -> Self {
        self.display_names
            .insert(property.into(), display_name.into());
        self
    }

    #[must_use]
    pub fn with_label_property(mut self, property: impl Into<PropertyId>) -> Self {
        self.x_axis_label_property = Some(property.into());
        self
    }

    /// Sets free-text value axis bounds; empty strings mean "auto".
    #[must_use]
    pub fn with_value_bounds(mut self, y_min: impl Into<String>, y_max: impl Into<String>) -> Self {
        self.y_min = y_min.into();
        self.y_max = y_max.into();
        self
    }

    #[must_use]
    pub fn with_fill_area(mut self, fill_area: bool) -> Self {
        self.fill_area = fill_area;
        self
    }

    #[must_use]
    pub fn with_show_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    #[must_use]
    pub fn with_aggregation_method(mut self, method: AggregationMethod) -> Self {
        self.aggregation_method = method;
        self
    }

    /// Configured label property, falling back to `file.name`.
    #[must_use]
    pub fn label_property(&self) -> PropertyId {
        self.x_axis_label_property
            .as_ref()
            .filter(|property| !property.as_str().is_empty())
            .cloned()
            .unwrap_or_else(|| PropertyId::new(DEFAULT_LABEL_PROPERTY))
    }

    /// Selected properties that can be plotted (`note.*` and `formula.*`).
    pub fn series_properties(&self) -> impl Iterator<Item = &PropertyId> {
        self.order.iter().filter(|property| property.is_plottable())
    }

    /// User rename when present, otherwise the property name without its
    /// namespace.
    #[must_use]
    pub fn display_name(&self, property: &PropertyId) -> String {
        match self.display_names.get(property) {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => property.name().to_owned(),
        }
    }

    #[must_use]
    pub fn y_min_bound(&self) -> Option<f64> {
        parse_number_prefix(&self.y_min)
    }

    #[must_use]
    pub fn y_max_bound(&self) -> Option<f64> {
        parse_number_prefix(&self.y_max)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize view config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse view config: {e}")))
    }
}

fn default_show_points() -> bool {
    true
}
