// File: crates/scaling-chart/src/spec.rs
// Summary: Per-chart presentation options (titles, scale, range, marker, annotation, output path).

use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::annotate::AnnotationFormat;
use crate::axis::ScaleKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Diamond,
    Triangle,
}

/// Marker drawn at every plotted point. `size` is the marker's diameter
/// in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub shape: MarkerShape,
    pub size: f32,
}

impl MarkerStyle {
    pub const fn new(shape: MarkerShape, size: f32) -> Self { Self { shape, size } }
}

impl Default for MarkerStyle {
    fn default() -> Self { Self::new(MarkerShape::Circle, 8.0) }
}

/// Everything about one chart except its data.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub y_scale: ScaleKind,
    /// Fixed `(min, max)` for the y axis; auto-scaled when `None`.
    pub y_range: Option<(f64, f64)>,
    pub marker: MarkerStyle,
    pub annotation: AnnotationFormat,
    /// Legend entry for the series; no legend box when `None`.
    pub legend: Option<String>,
    /// Stroke and marker color; the theme's line color when `None`.
    pub line_color: Option<skia::Color>,
    pub output_path: PathBuf,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>, output_path: impl AsRef<Path>) -> Self {
        Self {
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            y_scale: ScaleKind::Linear,
            y_range: None,
            marker: MarkerStyle::default(),
            annotation: AnnotationFormat::default(),
            legend: None,
            line_color: None,
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn y_scale(mut self, kind: ScaleKind) -> Self {
        self.y_scale = kind;
        self
    }

    pub fn y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    pub fn marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    pub fn annotation(mut self, format: AnnotationFormat) -> Self {
        self.annotation = format;
        self
    }

    pub fn legend(mut self, label: impl Into<String>) -> Self {
        self.legend = Some(label.into());
        self
    }

    pub fn line_color(mut self, color: skia::Color) -> Self {
        self.line_color = Some(color);
        self
    }

    pub fn output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.output_path = path.as_ref().to_path_buf();
        self
    }
}
