use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Reduction applied to a group's numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMethod {
    #[default]
    Avg,
    Sum,
    Min,
    Max,
    Count,
}

impl AggregationMethod {
    pub const ALL: [Self; 5] = [Self::Avg, Self::Sum, Self::Min, Self::Max, Self::Count];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Sum => "sum",
            Self::Min => "min",
            Self::Max => "max",
            Self::Count => "count",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Avg => "Average",
            Self::Sum => "Sum",
            Self::Min => "Minimum",
            Self::Max => "Maximum",
            Self::Count => "Count",
        }
    }
}

impl fmt::Display for AggregationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AggregationMethod {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.key() == s)
            .ok_or_else(|| ChartError::InvalidConfig(format!("unknown aggregation method `{s}`")))
    }
}

/// Reduces `values` under `method`.
///
/// Returns `None` when `values` is empty, for every method including `Count`,
/// so "no data" stays distinguishable from a zero result. A reduction that
/// overflows the f64 range is also `None` rather than an infinite value.
#[must_use]
pub fn aggregate(values: &[f64], method: AggregationMethod) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let result = match method {
        AggregationMethod::Avg => mean(values),
        AggregationMethod::Sum => values.iter().sum(),
        AggregationMethod::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        AggregationMethod::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        AggregationMethod::Count => values.len() as f64,
    };
    Some(result).filter(|value| value.is_finite())
}

fn mean(values: &[f64]) -> f64 {
    let len = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / len
    } else {
        values.iter().map(|value| value / len).sum()
    }
}
