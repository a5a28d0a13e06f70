// File: crates/scaling-chart/src/series.rs
// Summary: Sample/Series model; a sample's y may be absent when the measurement was not taken.

use crate::error::{RenderError, Result};

/// One measurement. `y == None` means it was not collected for this `x`
/// (e.g. a single-rank run of a metric that needs two ranks).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: Option<f64>,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y: Some(y) } }
    pub const fn absent(x: f64) -> Self { Self { x, y: None } }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self { Self::new(x, y) }
}

impl From<(f64, Option<f64>)> for Sample {
    fn from((x, y): (f64, Option<f64>)) -> Self { Self { x, y } }
}

/// Samples ordered by strictly ascending, finite `x`.
/// Contract: every present `y` is finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Validate and wrap `samples`.
    pub fn new<S: Into<Sample>>(samples: impl IntoIterator<Item = S>) -> Result<Self> {
        let samples: Vec<Sample> = samples.into_iter().map(Into::into).collect();
        for (i, s) in samples.iter().enumerate() {
            if !s.x.is_finite() {
                return Err(RenderError::InvalidSeries(format!("x at index {i} is not finite")));
            }
            if let Some(y) = s.y {
                if !y.is_finite() {
                    return Err(RenderError::InvalidSeries(format!("y at x={} is not finite", s.x)));
                }
            }
            if i > 0 && samples[i - 1].x >= s.x {
                return Err(RenderError::InvalidSeries(format!(
                    "x values must be strictly ascending ({} then {})",
                    samples[i - 1].x, s.x
                )));
            }
        }
        Ok(Self { samples })
    }

    /// Build from parallel x and y columns, the way benchmark tables are usually kept.
    pub fn from_columns(xs: &[f64], ys: &[Option<f64>]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(RenderError::InvalidSeries(format!(
                "{} x values but {} y values",
                xs.len(),
                ys.len()
            )));
        }
        Self::new(xs.iter().zip(ys).map(|(&x, &y)| Sample { x, y }))
    }

    pub fn samples(&self) -> &[Sample] { &self.samples }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// Points with a present y, in x order.
    pub fn present(&self) -> Vec<(f64, f64)> {
        self.samples.iter().filter_map(|s| s.y.map(|y| (s.x, y))).collect()
    }
}
