use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// vertical value axis grows upwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    // Halved so domains spanning most of the f64 range do not overflow.
    fn half_domain_span(self) -> f64 {
        self.domain_end / 2.0 - self.domain_start / 2.0
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value / 2.0 - self.domain_start / 2.0) / self.half_domain_span();
        let pixel = self.range_start + normalized * (self.range_end - self.range_start);
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value {value} maps outside the drawable range"
            )));
        }
        Ok(pixel)
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return Err(ChartError::InvalidData(
                "cannot invert a zero-width range".to_owned(),
            ));
        }

        let normalized = (pixel - self.range_start) / span;
        let offset = normalized * self.half_domain_span();
        Ok(self.domain_start + offset + offset)
    }
}

/// Discrete scale placing category `index` on a horizontal pixel range.
///
/// Categories sit on the range edges (no outer padding), matching how line
/// charts align the first and last point with the plot borders. A single
/// category is centered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScale {
    range_start: f64,
    range_end: f64,
    count: usize,
}

impl CategoryScale {
    pub fn new(range: (f64, f64), count: usize) -> ChartResult<Self> {
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "category range must be finite".to_owned(),
            ));
        }
        Ok(Self {
            range_start,
            range_end,
            count,
        })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Distance between adjacent categories.
    #[must_use]
    pub fn step(self) -> f64 {
        if self.count <= 1 {
            return 0.0;
        }
        (self.range_end - self.range_start) / (self.count - 1) as f64
    }

    /// Pixel position of category `index`, `None` when out of bounds.
    #[must_use]
    pub fn pixel_for_index(self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        if self.count == 1 {
            return Some((self.range_start + self.range_end) / 2.0);
        }
        Some(self.range_start + self.step() * index as f64)
    }

    /// Category nearest to `pixel`, `None` when the scale is empty.
    #[must_use]
    pub fn nearest_index(self, pixel: f64) -> Option<usize> {
        if self.count == 0 || !pixel.is_finite() {
            return None;
        }
        let step = self.step();
        if step == 0.0 {
            return Some(0);
        }
        let raw = ((pixel - self.range_start) / step).round();
        let max_index = (self.count - 1) as f64;
        Some(raw.clamp(0.0, max_index) as usize)
    }
}

/// Padding applied when a value domain is derived from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomainTuning {
    pub padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for ValueDomainTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.05,
            min_span_absolute: 1.0,
        }
    }
}

/// Resolves the vertical domain from optional fixed bounds and plotted values.
///
/// Fixed bounds always win; the free side is fitted to the data with padding.
/// The result is always finite with `min < max`: flat data is widened by at
/// least a few ulps of its magnitude and overflowing padding is clamped to
/// the representable range.
pub fn resolve_value_domain(
    fixed_min: Option<f64>,
    fixed_max: Option<f64>,
    values: impl IntoIterator<Item = f64>,
    tuning: ValueDomainTuning,
) -> ChartResult<(f64, f64)> {
    for bound in [fixed_min, fixed_max].into_iter().flatten() {
        if !bound.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "value axis bound {bound} must be finite"
            )));
        }
    }

    let (data_min, data_max) = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, value| match acc {
            Some((min, max)) => Some((min.min(value), max.max(value))),
            None => Some((value, value)),
        })
        .unwrap_or((0.0, 1.0));

    let span = clamp_finite(data_max - data_min).max(min_span(data_min, data_max, tuning));
    let padding = span * tuning.padding_ratio;
    let mut min = fixed_min.unwrap_or_else(|| {
        if data_min == data_max {
            data_min - span / 2.0
        } else {
            data_min - padding
        }
    });
    let mut max = fixed_max.unwrap_or_else(|| {
        if data_min == data_max {
            data_max + span / 2.0
        } else {
            data_max + padding
        }
    });
    min = clamp_finite(min);
    max = clamp_finite(max);

    if min >= max {
        match (fixed_min, fixed_max) {
            (Some(_), None) => max = clamp_finite(min + span.max(min_span(min, min, tuning))),
            (None, Some(_)) => min = clamp_finite(max - span.max(min_span(max, max, tuning))),
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "value axis minimum {min} must be below maximum {max}"
                )));
            }
        }
    }
    if min >= max {
        return Err(ChartError::InvalidData(format!(
            "value axis bound {min} leaves no room for a positive span"
        )));
    }

    Ok((min, max))
}

/// Smallest span that still separates values around `low..=high`.
fn min_span(low: f64, high: f64, tuning: ValueDomainTuning) -> f64 {
    let magnitude = low.abs().max(high.abs());
    tuning
        .min_span_absolute
        .max(magnitude * f64::EPSILON * 8.0)
}

fn clamp_finite(value: f64) -> f64 {
    value.clamp(f64::MIN, f64::MAX)
}
