//! linechart-rs: deterministic projection of grouped query results into
//! line charts.
//!
//! The crate keeps a strict split between pure projection logic (`core`),
//! the view facade that owns chart lifecycle and navigation (`api`), and the
//! renderer contract (`render`). Rendering backends and host navigation are
//! plugged in through traits.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LineChartView, LineChartViewConfig};
pub use error::{ChartError, ChartResult};
