// File: crates/scaling-chart/src/axis.rs
// Summary: Axis scale kinds and resolved axis ranges.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

impl ScaleKind {
    pub fn is_log(self) -> bool {
        matches!(self, ScaleKind::Log10)
    }
}

/// A resolved axis: label, visible range and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }
}
