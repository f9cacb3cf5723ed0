use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataPoint, Projection, QueryResult, Rect};
use crate::interaction::Activation;
use crate::render::{ChartDescription, ChartHandle, Renderer, ThemeColors};

use super::{
    ActivationSource, ChartPlan, DispatchOutcome, LineChartViewConfig, NavigationHost,
    OverlayLabel, PreviewAnchor, PreviewHost, ViewMessage, dispatch_activation, dispatch_hover,
    plan_chart, sync_overlay,
};

/// Host surface the view draws into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLayout {
    /// Element hosting the view; overlay offsets are relative to it.
    pub container: Rect,
    /// Drawing surface handed to the renderer.
    pub canvas: Rect,
}

impl SurfaceLayout {
    #[must_use]
    pub const fn new(container: Rect, canvas: Rect) -> Self {
        Self { container, canvas }
    }

    /// Canvas covering the whole container.
    #[must_use]
    pub const fn filling(container: Rect) -> Self {
        Self {
            container,
            canvas: container,
        }
    }
}

/// Result of one data-update pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderOutcome {
    Rendered {
        categories: usize,
        overlay_active: bool,
    },
    Message(ViewMessage),
}

/// Everything produced by the latest successful pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub plan: ChartPlan,
    pub overlay: Option<Vec<OverlayLabel>>,
}

#[derive(Debug)]
enum ViewState {
    Idle,
    Message(ViewMessage),
    Chart(RenderPass),
}

/// Line chart view bound to one host container.
///
/// Each data update rebuilds the whole pass. The live chart object is the
/// only state carried between passes; it is destroyed before a replacement
/// is created, on unload, and when the view is dropped.
pub struct LineChartView<R: Renderer> {
    renderer: R,
    layout: SurfaceLayout,
    theme: ThemeColors,
    chart: Option<R::Chart>,
    state: ViewState,
}

impl<R: Renderer> LineChartView<R> {
    #[must_use]
    pub fn new(renderer: R, layout: SurfaceLayout) -> Self {
        Self {
            renderer,
            layout,
            theme: ThemeColors::default(),
            chart: None,
            state: ViewState::Idle,
        }
    }

    /// Theme colors used from the next data update on.
    pub fn set_theme(&mut self, theme: ThemeColors) {
        self.theme = theme;
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeColors) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn chart(&self) -> Option<&R::Chart> {
        self.chart.as_ref()
    }

    #[must_use]
    pub fn message(&self) -> Option<ViewMessage> {
        match self.state {
            ViewState::Message(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn render_pass(&self) -> Option<&RenderPass> {
        match &self.state {
            ViewState::Chart(pass) => Some(pass),
            _ => None,
        }
    }

    #[must_use]
    pub fn projection(&self) -> Option<&Projection> {
        self.render_pass().map(|pass| &pass.plan.projection)
    }

    #[must_use]
    pub fn description(&self) -> Option<&ChartDescription> {
        self.render_pass().map(|pass| &pass.plan.description)
    }

    #[must_use]
    pub fn overlay_labels(&self) -> Option<&[OverlayLabel]> {
        self.render_pass()
            .and_then(|pass| pass.overlay.as_deref())
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.projection()
            .map(|projection| projection.points.as_slice())
            .unwrap_or_default()
    }

    /// Runs the full pipeline for a changed query result or configuration.
    pub fn on_data_updated(
        &mut self,
        result: &QueryResult,
        config: &LineChartViewConfig,
    ) -> RenderOutcome {
        self.release_chart();
        self.state = ViewState::Idle;

        let plan = match plan_chart(result, config, self.theme) {
            Ok(plan) => plan,
            Err(message) => return self.show_message(message),
        };

        let chart = match self
            .renderer
            .create_chart(self.layout.canvas, &plan.description)
        {
            Ok(chart) => chart,
            Err(err) => {
                warn!(error = %err, "failed to create chart");
                return self.show_message(ViewMessage::RenderingContextUnavailable);
            }
        };

        let overlay = sync_overlay(&plan.projection.points, &chart, self.layout.container);
        let outcome = RenderOutcome::Rendered {
            categories: plan.projection.points.len(),
            overlay_active: overlay.is_some(),
        };
        debug!(?outcome, "line chart rendered");
        self.chart = Some(chart);
        self.state = ViewState::Chart(RenderPass { plan, overlay });
        outcome
    }

    /// Re-lays the live chart out for a resized surface and re-derives the
    /// overlay positions. Data points and series values are left untouched.
    pub fn on_resize(&mut self, layout: SurfaceLayout) {
        self.layout = layout;
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        let ViewState::Chart(pass) = &mut self.state else {
            return;
        };

        if let Err(err) = chart.resize(layout.canvas) {
            warn!(error = %err, "chart resize failed, hiding overlay labels");
            if pass.overlay.is_some() {
                pass.overlay = Some(Vec::new());
            }
            return;
        }
        pass.overlay = sync_overlay(&pass.plan.projection.points, &*chart, layout.container);
    }

    /// Handles a click on the chart surface at canvas-relative coordinates.
    pub fn click_chart<N: NavigationHost + ?Sized>(
        &self,
        x: f64,
        y: f64,
        activation: Activation,
        host: &mut N,
    ) -> DispatchOutcome {
        let index = self.chart.as_ref().and_then(|chart| chart.index_at(x, y));
        let point = index.and_then(|index| self.points().get(index));
        dispatch_activation(point, activation, ActivationSource::ChartSurface, host)
    }

    /// Handles a click on the overlay label at `index`.
    pub fn click_overlay<N: NavigationHost + ?Sized>(
        &self,
        index: usize,
        activation: Activation,
        host: &mut N,
    ) -> DispatchOutcome {
        if self.overlay_label(index).is_none() {
            return DispatchOutcome::Ignored;
        }
        dispatch_activation(
            self.points().get(index),
            activation,
            ActivationSource::OverlayLabel,
            host,
        )
    }

    /// Handles the pointer entering the overlay label at `index`.
    pub fn hover_overlay<P: PreviewHost + ?Sized>(
        &self,
        index: usize,
        host: &mut P,
    ) -> DispatchOutcome {
        let Some(label) = self.overlay_label(index) else {
            return DispatchOutcome::Ignored;
        };
        let anchor = PreviewAnchor {
            index,
            left_px: label.left_px,
        };
        dispatch_hover(self.points().get(index), anchor, host)
    }

    /// Tears the view down; the chart is released unconditionally.
    pub fn on_unload(&mut self) {
        self.release_chart();
        self.state = ViewState::Idle;
    }

    fn overlay_label(&self, index: usize) -> Option<&OverlayLabel> {
        self.overlay_labels()?
            .iter()
            .find(|label| label.index == index)
    }

    fn show_message(&mut self, message: ViewMessage) -> RenderOutcome {
        debug!(?message, "showing view message");
        self.state = ViewState::Message(message);
        RenderOutcome::Message(message)
    }

    fn release_chart(&mut self) {
        if let Some(mut chart) = self.chart.take() {
            chart.destroy();
            debug!("released chart");
        }
    }
}

impl<R: Renderer> Drop for LineChartView<R> {
    fn drop(&mut self) {
        self.release_chart();
    }
}
