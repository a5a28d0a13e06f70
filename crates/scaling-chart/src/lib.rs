// File: crates/scaling-chart/src/lib.rs
// Summary: Library entry point; exports the annotated line chart renderer and its data model.

pub mod annotate;
pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod output;
pub mod scale;
pub mod series;
pub mod spec;
pub mod text;
pub mod theme;
pub mod types;

pub use annotate::AnnotationFormat;
pub use axis::{Axis, ScaleKind};
pub use chart::{ChartRenderer, RenderOptions};
pub use error::RenderError;
pub use layout::{Annotation, ChartLayout, PlacedPoint, ViewState};
pub use series::{Sample, Series};
pub use spec::{ChartSpec, MarkerShape, MarkerStyle};
pub use text::TextShaper;
pub use theme::{palette, Theme};
