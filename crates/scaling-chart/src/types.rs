// File: crates/scaling-chart/src/types.rs
// Summary: Shared figure constants (logical size, margins, offsets).

/// Default figure width in logical pixels (a 10 inch figure at 100 px/inch).
pub const WIDTH: i32 = 1000;
/// Default figure height in logical pixels.
pub const HEIGHT: i32 = 600;

/// Vertical distance between a point and the baseline of its annotation.
pub const ANNOTATION_OFFSET: f32 = 10.0;

pub const TITLE_SIZE: f32 = 18.0;
pub const LABEL_SIZE: f32 = 15.0;
pub const TICK_SIZE: f32 = 12.0;
pub const ANNOTATION_SIZE: f32 = 11.5;
pub const LEGEND_SIZE: f32 = 12.5;

/// Figure margins around the plot area, in logical pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(96, 32, 60, 72)
    }
}
