use serde::{Deserialize, Serialize};

use crate::core::AggregationMethod;
use crate::error::{ChartError, ChartResult};

pub const LINE_CHART_VIEW_TYPE: &str = "line-chart-view";

/// Kind of control a settings panel renders for one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewOptionKind {
    /// Picker over the query's properties.
    Property,
    Text { default: String },
    Toggle { default: bool },
    Dropdown {
        default: String,
        /// `(value, label)` pairs in display order.
        options: Vec<(String, String)>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOption {
    pub key: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: ViewOptionKind,
}

/// Everything a host needs to list the view and render its settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRegistration {
    pub view_type: String,
    pub name: String,
    pub icon: String,
    pub options: Vec<ViewOption>,
}

impl ViewRegistration {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize view registration: {e}"))
        })
    }
}

#[must_use]
pub fn line_chart_registration() -> ViewRegistration {
    ViewRegistration {
        view_type: LINE_CHART_VIEW_TYPE.to_owned(),
        name: "Line Chart".to_owned(),
        icon: "lucide-line-chart".to_owned(),
        options: view_options(),
    }
}

/// Option schema for the settings panel, keyed like `LineChartViewConfig`.
#[must_use]
pub fn view_options() -> Vec<ViewOption> {
    vec![
        ViewOption {
            key: "xAxisLabelProperty".to_owned(),
            display_name: "X axis label property".to_owned(),
            description: Some(
                "Property to use for X axis labels (e.g., file.name, note.date)".to_owned(),
            ),
            kind: ViewOptionKind::Property,
        },
        ViewOption {
            key: "yMin".to_owned(),
            display_name: "Y axis minimum".to_owned(),
            description: Some("Optional minimum value for Y axis".to_owned()),
            kind: ViewOptionKind::Text {
                default: String::new(),
            },
        },
        ViewOption {
            key: "yMax".to_owned(),
            display_name: "Y axis maximum".to_owned(),
            description: Some("Optional maximum value for Y axis".to_owned()),
            kind: ViewOptionKind::Text {
                default: String::new(),
            },
        },
        ViewOption {
            key: "fillArea".to_owned(),
            display_name: "Fill area under line".to_owned(),
            description: None,
            kind: ViewOptionKind::Toggle { default: false },
        },
        ViewOption {
            key: "showPoints".to_owned(),
            display_name: "Show data points".to_owned(),
            description: None,
            kind: ViewOptionKind::Toggle { default: true },
        },
        ViewOption {
            key: "aggregationMethod".to_owned(),
            display_name: "Aggregation method".to_owned(),
            description: Some("How to aggregate values when data is grouped".to_owned()),
            kind: ViewOptionKind::Dropdown {
                default: AggregationMethod::default().key().to_owned(),
                options: AggregationMethod::ALL
                    .into_iter()
                    .map(|method| (method.key().to_owned(), method.label().to_owned()))
                    .collect(),
            },
        },
    ]
}
