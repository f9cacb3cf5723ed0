use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PointPrimitive, TextPrimitive};

/// Primitives drawn for one dataset of the chart description.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayer {
    /// Position of the dataset in `ChartDescription::datasets`.
    pub dataset: usize,
    pub label: String,
    pub segments: Vec<LinePrimitive>,
    pub points: Vec<PointPrimitive>,
}

impl SeriesLayer {
    #[must_use]
    pub fn new(dataset: usize, label: impl Into<String>) -> Self {
        Self {
            dataset,
            label: label.into(),
            segments: Vec::new(),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_segment(mut self, segment: LinePrimitive) -> Self {
        self.segments.push(segment);
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: PointPrimitive) -> Self {
        self.points.push(point);
        self
    }

    fn validate(&self) -> ChartResult<()> {
        for segment in &self.segments {
            segment.validate()?;
        }
        for point in &self.points {
            point.validate()?;
        }
        Ok(())
    }
}

/// Scene for one line-chart draw pass: a layer per dataset in draw order,
/// followed by the category tick labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub series: Vec<SeriesLayer>,
    pub ticks: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            series: Vec::new(),
            ticks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, layer: SeriesLayer) -> Self {
        self.series.push(layer);
        self
    }

    #[must_use]
    pub fn with_tick(mut self, tick: TextPrimitive) -> Self {
        self.ticks.push(tick);
        self
    }

    /// Layer drawn for dataset `dataset`, if it produced one.
    #[must_use]
    pub fn layer(&self, dataset: usize) -> Option<&SeriesLayer> {
        self.series.iter().find(|layer| layer.dataset == dataset)
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.series.iter().map(|layer| layer.segments.len()).sum()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|layer| layer.points.len()).sum()
    }

    /// Checks the viewport, every primitive, and that layers follow dataset
    /// order without repeats.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for pair in self.series.windows(2) {
            if pair[0].dataset >= pair[1].dataset {
                return Err(ChartError::InvalidData(format!(
                    "series layer {} drawn after layer {}",
                    pair[1].dataset, pair[0].dataset
                )));
            }
        }
        for layer in &self.series {
            layer.validate()?;
        }
        for tick in &self.ticks {
            tick.validate()?;
        }

        Ok(())
    }
}
