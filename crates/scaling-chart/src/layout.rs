// File: crates/scaling-chart/src/layout.rs
// Summary: Input checks, autoscale and pixel placement for one chart. Nothing is drawn here.

use tracing::debug;

use crate::axis::{Axis, ScaleKind};
use crate::chart::RenderOptions;
use crate::error::{RenderError, Result};
use crate::geometry::Rect;
use crate::grid::{format_tick, log_ticks, nice_ticks};
use crate::scale::AxisScale;
use crate::series::Series;
use crate::spec::ChartSpec;
use crate::types::ANNOTATION_OFFSET;

/// Fraction of the data span added below the lowest point.
const Y_PAD_LOW: f64 = 0.05;
/// Fraction added above the highest point; larger so annotations stay inside.
const Y_PAD_HIGH: f64 = 0.12;
const X_PAD: f64 = 0.05;
const Y_TICK_TARGET: usize = 6;

/// Visible data ranges of a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Fit the view to `points` (non-empty, y > 0 when `y_scale` is log),
    /// using `y_range` verbatim when given.
    pub fn fit(points: &[(f64, f64)], y_scale: ScaleKind, y_range: Option<(f64, f64)>) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }

        let (x_min, x_max) = if (x_max - x_min).abs() < 1e-12 {
            (widen(x_min, -1.0), widen(x_max, 1.0))
        } else {
            pad(x_min, x_max, X_PAD, X_PAD)
        };

        let (y_min, y_max) = match (y_range, y_scale) {
            (Some(range), _) => range,
            (None, ScaleKind::Linear) => pad_linear(y_min, y_max),
            (None, ScaleKind::Log10) => {
                let (lo, hi) = pad_log(y_min.log10(), y_max.log10());
                let (lo, hi) = (10f64.powf(lo), 10f64.powf(hi));
                // keep the data bound where the padded one under- or overflows
                (if lo > 0.0 && lo.is_finite() { lo } else { y_min }, if hi.is_finite() { hi } else { y_max })
            }
        };
        Self { x_min, x_max, y_min, y_max }
    }
}

/// `v + delta`, or `v` itself when that leaves the finite range.
fn widen(v: f64, delta: f64) -> f64 {
    let w = v + delta;
    if w.is_finite() { w } else { v }
}

/// Pad `[lo, hi]` by fractions of its span. The span is taken from the
/// halves so that bounds near `f64::MAX` do not overflow.
fn pad(lo: f64, hi: f64, below: f64, above: f64) -> (f64, f64) {
    let half = hi * 0.5 - lo * 0.5;
    (widen(lo, -half * (2.0 * below)), widen(hi, half * (2.0 * above)))
}

fn pad_linear(lo: f64, hi: f64) -> (f64, f64) {
    if (hi - lo).abs() < 1e-12 {
        let d = if lo.abs() > 1e-12 { lo.abs() * 0.1 } else { 1.0 };
        return (widen(lo, -d), widen(hi, d));
    }
    pad(lo, hi, Y_PAD_LOW, Y_PAD_HIGH)
}

fn pad_log(lo: f64, hi: f64) -> (f64, f64) {
    if (hi - lo).abs() < 1e-12 {
        return (lo - 0.5, hi + 0.5);
    }
    pad(lo, hi, Y_PAD_LOW, Y_PAD_HIGH)
}

/// A plotted point in data and logical pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedPoint {
    pub x: f64,
    pub y: f64,
    pub px: f32,
    pub py: f32,
}

/// Annotation text and the centre of its baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub px: f32,
    pub py: f32,
}

/// Everything the draw pass needs, in logical pixels.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub width: i32,
    pub height: i32,
    pub plot: Rect,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Exactly the plotted x values, ascending.
    pub x_ticks: Vec<f64>,
    pub y_ticks: Vec<f64>,
    pub points: Vec<PlacedPoint>,
    pub annotations: Vec<Annotation>,
}

impl ChartLayout {
    /// Filter, validate and place `series` according to `spec` and `opts`.
    pub fn compute(series: &Series, spec: &ChartSpec, opts: &RenderOptions) -> Result<Self> {
        let data = series.present();
        if data.is_empty() {
            return Err(RenderError::EmptySeries);
        }
        if spec.y_scale.is_log() {
            if let Some(&(x, y)) = data.iter().find(|&&(_, y)| y <= 0.0) {
                return Err(RenderError::InvalidScale { x, y });
            }
        }
        if let Some((min, max)) = spec.y_range {
            let scale = if spec.y_scale.is_log() { "log" } else { "linear" };
            let bad = !min.is_finite() || !max.is_finite() || min >= max || (spec.y_scale.is_log() && min <= 0.0);
            if bad {
                return Err(RenderError::InvalidRange { min, max, scale });
            }
        }

        let view = ViewState::fit(&data, spec.y_scale, spec.y_range);
        let ins = opts.insets;
        let plot = Rect::from_ltrb(
            ins.left as f32,
            ins.top as f32,
            (opts.width - ins.right as i32) as f32,
            (opts.height - ins.bottom as i32) as f32,
        );

        let x_axis = Axis::new(spec.x_label.clone(), view.x_min, view.x_max);
        let y_axis = Axis::new(spec.y_label.clone(), view.y_min, view.y_max).with_kind(spec.y_scale);
        let sx = AxisScale::new(ScaleKind::Linear, plot.left, plot.right, x_axis.min, x_axis.max);
        let sy = AxisScale::new(spec.y_scale, plot.bottom, plot.top, y_axis.min, y_axis.max);

        let points: Vec<PlacedPoint> = data
            .iter()
            .map(|&(x, y)| PlacedPoint { x, y, px: sx.to_px(x), py: sy.to_px(y) })
            .collect();
        // a fixed y_range can push points out of the plot; their labels go too
        let annotations = points
            .iter()
            .filter(|p| plot.contains(p.px, p.py))
            .map(|p| Annotation {
                text: spec.annotation.format(p.y),
                px: p.px,
                py: p.py - ANNOTATION_OFFSET,
            })
            .collect();

        let x_ticks = points.iter().map(|p| p.x).collect();
        let y_ticks = match spec.y_scale {
            ScaleKind::Linear => nice_ticks(y_axis.min, y_axis.max, Y_TICK_TARGET),
            ScaleKind::Log10 => log_ticks(y_axis.min, y_axis.max),
        };

        debug!(
            title = %spec.title,
            points = points.len(),
            dropped = series.len() - points.len(),
            y_min = y_axis.min,
            y_max = y_axis.max,
            "laid out chart"
        );

        Ok(Self {
            width: opts.width,
            height: opts.height,
            plot,
            x_axis,
            y_axis,
            x_ticks,
            y_ticks,
            points,
            annotations,
        })
    }

    pub fn x_scale(&self) -> AxisScale {
        AxisScale::new(self.x_axis.kind, self.plot.left, self.plot.right, self.x_axis.min, self.x_axis.max)
    }

    pub fn y_scale(&self) -> AxisScale {
        AxisScale::new(self.y_axis.kind, self.plot.bottom, self.plot.top, self.y_axis.min, self.y_axis.max)
    }

    /// Tick labels for the x axis, in tick order.
    pub fn x_tick_labels(&self) -> Vec<String> {
        self.x_ticks.iter().map(|&v| format_tick(v, false)).collect()
    }

    /// Tick labels for the y axis, in tick order.
    pub fn y_tick_labels(&self) -> Vec<String> {
        let log = self.y_axis.kind.is_log();
        self.y_ticks.iter().map(|&v| format_tick(v, log)).collect()
    }
}
