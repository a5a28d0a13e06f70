// File: crates/scaling-chart/src/annotate.rs
// Summary: Per-point annotation text formats.

use std::fmt;

/// How a point's y value is written next to it.
#[derive(Clone, Copy)]
pub enum AnnotationFormat {
    /// Fixed decimals: `Fixed(2)` renders 3.883 as `3.88`.
    Fixed(usize),
    /// Mantissa decimals with a signed two-digit exponent: `Scientific(2)`
    /// renders 0.000003107 as `3.11e-06`.
    Scientific(usize),
    /// Anything else, e.g. a unit suffix.
    Custom(fn(f64) -> String),
}

impl AnnotationFormat {
    pub fn format(&self, v: f64) -> String {
        match *self {
            AnnotationFormat::Fixed(decimals) => format!("{v:.decimals$}"),
            AnnotationFormat::Scientific(decimals) => format_scientific(v, decimals),
            AnnotationFormat::Custom(f) => f(v),
        }
    }
}

impl Default for AnnotationFormat {
    fn default() -> Self { AnnotationFormat::Fixed(2) }
}

impl fmt::Debug for AnnotationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationFormat::Fixed(d) => f.debug_tuple("Fixed").field(d).finish(),
            AnnotationFormat::Scientific(d) => f.debug_tuple("Scientific").field(d).finish(),
            AnnotationFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// `{:e}` with the exponent padded to at least two digits and always signed.
pub fn format_scientific(v: f64, decimals: usize) -> String {
    let raw = format!("{v:.decimals$e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", e.abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}
