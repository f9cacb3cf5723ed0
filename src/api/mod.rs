mod chart_assembler;
mod json_contract;
mod navigation;
mod overlay;
mod registration;
mod view;
mod view_config;

pub use chart_assembler::{
    ChartPlan, GROUPED_X_AXIS_TITLE, LINE_COLORS, MULTI_SERIES_Y_AXIS_TITLE, ViewMessage,
    assemble_chart, palette_color, plan_chart, resolve_series,
};
pub use json_contract::{CHART_DESCRIPTION_JSON_SCHEMA_V1, ChartDescriptionJsonContractV1};
pub use navigation::{
    ActivationSource, DispatchOutcome, NavigationHost, PreviewAnchor, PreviewHost,
    dispatch_activation, dispatch_hover,
};
pub use overlay::{OverlayLabel, sync_overlay};
pub use registration::{
    LINE_CHART_VIEW_TYPE, ViewOption, ViewOptionKind, ViewRegistration, line_chart_registration,
    view_options,
};
pub use view::{LineChartView, RenderOutcome, RenderPass, SurfaceLayout};
pub use view_config::{DEFAULT_LABEL_PROPERTY, LineChartViewConfig};
