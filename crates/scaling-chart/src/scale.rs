// File: crates/scaling-chart/src/scale.rs
// Summary: Value-to-pixel transforms for linear and log10 axes.

use crate::axis::ScaleKind;

/// Maps a data interval onto a pixel interval. `start_px` receives `vmin`,
/// `end_px` receives `vmax`; for a Y axis pass `bottom` then `top` so that
/// larger values sit higher.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new(kind: ScaleKind, start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        match kind {
            ScaleKind::Linear => Self::new_linear(start_px, end_px, vmin, vmax),
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, vmin, vmax),
        }
    }

    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-300;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { start_px, end_px, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-300).log10() - self.log_min) / span
        } else {
            let span = self.vmax - self.vmin;
            if span.is_finite() {
                (v - self.vmin) / span.max(1e-12)
            } else {
                // halves keep ranges spanning most of f64 finite
                (v * 0.5 - self.vmin * 0.5) / (self.vmax * 0.5 - self.vmin * 0.5)
            }
        };
        self.start_px + frac as f32 * (self.end_px - self.start_px)
    }
}
