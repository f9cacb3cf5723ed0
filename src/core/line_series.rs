use serde::{Deserialize, Serialize};

use crate::core::scale::{CategoryScale, LinearScale};
use crate::error::ChartResult;

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projected vertex of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineVertex {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Projects category-aligned values into pixel-space vertices.
///
/// Null values produce no vertex.
pub fn project_line_vertices(
    values: &[Option<f64>],
    x_scale: CategoryScale,
    y_scale: LinearScale,
) -> ChartResult<Vec<LineVertex>> {
    let mut vertices = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        let (Some(value), Some(x)) = (value, x_scale.pixel_for_index(index)) else {
            continue;
        };
        let y = y_scale.domain_to_pixel(*value)?;
        vertices.push(LineVertex { index, x, y });
    }
    Ok(vertices)
}

/// Projects category-aligned values into adjacent line segments.
///
/// With `span_gaps` a null value is bridged by connecting its neighbours;
/// without it the line breaks at every null.
pub fn project_line_segments(
    values: &[Option<f64>],
    x_scale: CategoryScale,
    y_scale: LinearScale,
    span_gaps: bool,
) -> ChartResult<Vec<LineSegment>> {
    let vertices = project_line_vertices(values, x_scale, y_scale)?;
    let segments = vertices
        .windows(2)
        .filter(|pair| span_gaps || pair[1].index == pair[0].index + 1)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect();
    Ok(segments)
}
