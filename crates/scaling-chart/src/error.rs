// File: crates/scaling-chart/src/error.rs
// Summary: Error type for series construction and chart rendering.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// No sample with a present y value survived filtering.
    #[error("series has no present samples to plot")]
    EmptySeries,

    /// Log scale requested with a non-positive value.
    #[error("log scale requires positive values, got y={y} at x={x}")]
    InvalidScale { x: f64, y: f64 },

    /// A fixed y range that is empty or does not fit the requested scale.
    #[error("invalid y range [{min}, {max}] for {scale} scale")]
    InvalidRange { min: f64, max: f64, scale: &'static str },

    /// Samples that break the series contract.
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,
}

pub type Result<T> = std::result::Result<T, RenderError>;
