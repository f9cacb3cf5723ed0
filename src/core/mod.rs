pub mod aggregation;
pub mod label;
pub mod line_series;
pub mod mode;
pub mod ordering;
pub mod projection;
pub mod scale;
pub mod types;
pub mod value;

pub use aggregation::{AggregationMethod, aggregate};
pub use label::{ResolvedLabel, resolve_label};
pub use line_series::{LineSegment, LineVertex, project_line_segments, project_line_vertices};
pub use mode::{ProjectionMode, detect_mode};
pub use ordering::{compare_labels, merge_sort_by, sort_data_points};
pub use projection::{
    DataPoint, NavigationTarget, Projection, SeriesSpec, SeriesValues, UNGROUPED_LABEL, project,
    project_flat, project_grouped,
};
pub use scale::{CategoryScale, LinearScale, ValueDomainTuning, resolve_value_domain};
pub use types::{
    Entry, Group, PropertyId, PropertyNamespace, PropertyValue, QueryResult, Rect, Viewport,
};
pub use value::{
    extract_number, extract_text, format_number, number_from_value, parse_number,
    parse_number_prefix, text_from_value,
};
