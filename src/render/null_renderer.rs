use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{
    CategoryScale, LinearScale, Rect, ValueDomainTuning, Viewport, project_line_segments,
    project_line_vertices, resolve_value_domain,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartDescription, ChartHandle, LinePrimitive, PointPrimitive, RenderFrame, Renderer,
    SeriesLayer, TextHAlign, TextPrimitive,
};

const LINE_STROKE_WIDTH: f64 = 2.0;
const TICK_FONT_SIZE_PX: f64 = 12.0;

/// Space reserved around the plot area for axes, titles and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self {
            left: 56.0,
            right: 16.0,
            top: 40.0,
            bottom: 48.0,
        }
    }
}

/// Headless renderer used by tests and hosts without a drawing backend.
///
/// It lays charts out with the same category/value scales a drawing backend
/// would use and validates the resulting frame, so overlay positions and hit
/// testing behave like the real thing.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub insets: PlotInsets,
    /// When set, every `create_chart` fails as if no context could be acquired.
    pub context_unavailable: bool,
    created: usize,
    live: Rc<Cell<usize>>,
}

impl NullRenderer {
    #[must_use]
    pub fn with_insets(mut self, insets: PlotInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Number of charts created over the renderer's lifetime.
    #[must_use]
    pub fn created_charts(&self) -> usize {
        self.created
    }

    /// Number of charts created and not yet destroyed.
    #[must_use]
    pub fn live_charts(&self) -> usize {
        self.live.get()
    }
}

impl Renderer for NullRenderer {
    type Chart = NullChart;

    fn create_chart(
        &mut self,
        canvas: Rect,
        description: &ChartDescription,
    ) -> ChartResult<Self::Chart> {
        if self.context_unavailable {
            return Err(ChartError::RenderingContextUnavailable(
                "null renderer configured without a context".to_owned(),
            ));
        }

        let mut chart = NullChart {
            canvas,
            insets: self.insets,
            description: description.clone(),
            x_scale: CategoryScale::new((0.0, 0.0), 0)?,
            frame: RenderFrame::new(canvas_viewport(canvas)?),
            live: Rc::clone(&self.live),
            destroyed: false,
        };
        chart.layout()?;

        self.created += 1;
        self.live.set(self.live.get() + 1);
        Ok(chart)
    }
}

/// Chart object produced by [`NullRenderer`].
#[derive(Debug)]
pub struct NullChart {
    canvas: Rect,
    insets: PlotInsets,
    description: ChartDescription,
    x_scale: CategoryScale,
    frame: RenderFrame,
    live: Rc<Cell<usize>>,
    destroyed: bool,
}

impl NullChart {
    /// Scene produced by the latest layout pass.
    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn description(&self) -> &ChartDescription {
        &self.description
    }

    /// Plot area in canvas coordinates.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        Rect::new(
            self.insets.left,
            self.insets.top,
            (self.canvas.width - self.insets.left - self.insets.right).max(0.0),
            (self.canvas.height - self.insets.top - self.insets.bottom).max(0.0),
        )
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn layout(&mut self) -> ChartResult<()> {
        let plot = self.plot_area();
        let description = &self.description;
        self.x_scale = CategoryScale::new((plot.left, plot.right()), description.category_count())?;

        let domain = resolve_value_domain(
            description.y_axis.min,
            description.y_axis.max,
            description.plotted_values(),
            ValueDomainTuning::default(),
        )
        .or_else(|err| {
            warn!(error = %err, "ignoring fixed value axis bounds");
            resolve_value_domain(
                None,
                None,
                description.plotted_values(),
                ValueDomainTuning::default(),
            )
        })?;
        let y_scale = LinearScale::new(domain, (plot.bottom(), plot.top))?;

        let mut frame = RenderFrame::new(canvas_viewport(self.canvas)?);
        for (index, dataset) in description.datasets.iter().enumerate() {
            let mut layer = SeriesLayer::new(index, dataset.label.clone());
            for segment in
                project_line_segments(&dataset.values, self.x_scale, y_scale, dataset.span_gaps)?
            {
                layer = layer.with_segment(LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    LINE_STROKE_WIDTH,
                    dataset.border_color,
                ));
            }
            if dataset.point_radius > 0.0 {
                for vertex in project_line_vertices(&dataset.values, self.x_scale, y_scale)? {
                    layer = layer.with_point(PointPrimitive::new(
                        vertex.x,
                        vertex.y,
                        dataset.point_radius,
                        dataset.border_color,
                    ));
                }
            }
            frame = frame.with_series(layer);
        }

        if description.x_axis.ticks_visible {
            let baseline = plot.bottom() + TICK_FONT_SIZE_PX + 4.0;
            for (index, category) in description.categories.iter().enumerate() {
                let Some(x) = self.x_scale.pixel_for_index(index) else {
                    continue;
                };
                if category.is_empty() {
                    continue;
                }
                frame = frame.with_tick(TextPrimitive::new(
                    category.clone(),
                    x,
                    baseline,
                    TICK_FONT_SIZE_PX,
                    description.theme.text,
                    TextHAlign::Center,
                ));
            }
        }

        frame.validate()?;
        trace!(
            series = frame.series.len(),
            segments = frame.segment_count(),
            points = frame.point_count(),
            ticks = frame.ticks.len(),
            "null chart laid out"
        );
        self.frame = frame;
        Ok(())
    }
}

impl ChartHandle for NullChart {
    fn canvas_bounds(&self) -> Rect {
        self.canvas
    }

    fn x_pixel_for_index(&self, index: usize) -> Option<f64> {
        if self.destroyed {
            return None;
        }
        self.x_scale.pixel_for_index(index)
    }

    fn index_at(&self, x: f64, y: f64) -> Option<usize> {
        if self.destroyed || !self.plot_area().contains(x, y) {
            return None;
        }
        self.x_scale.nearest_index(x)
    }

    fn resize(&mut self, canvas: Rect) -> ChartResult<()> {
        if self.destroyed {
            return Err(ChartError::InvalidData(
                "cannot resize a destroyed chart".to_owned(),
            ));
        }
        self.canvas = canvas;
        self.layout()
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.live.set(self.live.get().saturating_sub(1));
    }
}

fn canvas_viewport(canvas: Rect) -> ChartResult<Viewport> {
    if !canvas.width.is_finite() || !canvas.height.is_finite() {
        return Err(ChartError::InvalidData(
            "canvas size must be finite".to_owned(),
        ));
    }
    let viewport = Viewport::new(
        canvas.width.max(0.0).round() as u32,
        canvas.height.max(0.0).round() as u32,
    );
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}
