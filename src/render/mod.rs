mod description;
mod frame;
mod null_renderer;
mod primitives;

pub use description::{
    CategoryAxis, ChartDescription, Dataset, LegendPosition, PresentationOptions, ThemeColors,
    ValueAxis,
};
pub use frame::{RenderFrame, SeriesLayer};
pub use null_renderer::{NullChart, NullRenderer, PlotInsets};
pub use primitives::{Color, LinePrimitive, PointPrimitive, TextHAlign, TextPrimitive};

use crate::core::Rect;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `ChartDescription` and hand back a
/// live chart object owning the drawing context. Drawing code stays isolated
/// from projection and navigation logic.
pub trait Renderer {
    type Chart: ChartHandle;

    /// Acquires a drawing context on `canvas` and draws `description` into it.
    ///
    /// Fails with `ChartError::RenderingContextUnavailable` when the surface
    /// cannot be acquired.
    fn create_chart(&mut self, canvas: Rect, description: &ChartDescription)
    -> ChartResult<Self::Chart>;
}

/// Live chart object returned by a [`Renderer`].
///
/// Pixel positions are relative to the canvas returned by `canvas_bounds`.
pub trait ChartHandle {
    /// Bounds of the drawing surface in host coordinates.
    fn canvas_bounds(&self) -> Rect;

    /// Horizontal pixel position of category `index` on the live scale.
    fn x_pixel_for_index(&self, index: usize) -> Option<f64>;

    /// Category under the canvas-relative position, if any.
    fn index_at(&self, x: f64, y: f64) -> Option<usize>;

    /// Lays the chart out again for a new canvas size.
    fn resize(&mut self, canvas: Rect) -> ChartResult<()>;

    /// Releases the drawing context. Calling it twice is a no-op.
    fn destroy(&mut self);
}
