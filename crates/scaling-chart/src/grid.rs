// File: crates/scaling-chart/src/grid.rs
// Summary: Tick layout helpers for linear and log10 axes.

/// Round `span / target` up to the nearest 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if raw <= 0.0 || !raw.is_finite() { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Upper bound on ticks per axis.
const MAX_TICKS: usize = 12;

/// Ticks at multiples of a nice step that fall inside `[min, max]`.
/// Empty when either bound is not finite.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() { return Vec::new(); }
    if !(max > min) { return vec![min]; }
    let target = target.clamp(1, MAX_TICKS);
    let span = max - min;
    let step = if span.is_finite() {
        nice_step(span, target)
    } else {
        // span overflows near f64::MAX
        nice_step(max / target as f64 - min / target as f64, 1)
    };
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    if last < first || last.saturating_sub(first) as usize > MAX_TICKS * 2 { return vec![min, max]; }
    (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // snap float noise like 0.30000000000000004
            if v.abs() < step * 1e-9 { 0.0 } else { v }
        })
        .collect()
}

/// One tick per power of ten inside `[min, max]`; both bounds must be positive.
pub fn decade_ticks(min: f64, max: f64) -> Vec<f64> {
    if min <= 0.0 || max <= min { return Vec::new(); }
    let lo = min.log10().ceil() as i32;
    let hi = max.log10().floor() as i32;
    (lo..=hi).map(|e| 10f64.powi(e)).collect()
}

/// Decade ticks, densified to 1-2-5 steps when the range holds fewer than two
/// decades and thinned to every n-th decade when it holds too many.
pub fn log_ticks(min: f64, max: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() { return Vec::new(); }
    let decades = decade_ticks(min, max);
    if decades.len() > MAX_TICKS {
        let stride = decades.len().div_ceil(MAX_TICKS - 2) as i32;
        return decades.into_iter().filter(|v| (v.log10().round() as i32) % stride == 0).collect();
    }
    if decades.len() >= 2 || min <= 0.0 || max <= min { return decades; }
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    (lo..=hi)
        .flat_map(|e| [1.0, 2.0, 5.0].map(|m| m * 10f64.powi(e)))
        .filter(|v| *v >= min && *v <= max)
        .collect()
}

/// Label for an axis tick: integers without a fraction, powers of ten and
/// very large or small values in exponent form, otherwise the shortest fixed
/// form that fits.
pub fn format_tick(v: f64, log: bool) -> String {
    if log {
        let e = (v.log10() + 1e-9).floor() as i32;
        let m = (v / 10f64.powi(e)).round() as i64;
        return format!("{m}e{e}");
    }
    if v != 0.0 && !(1e-4..1e9).contains(&v.abs()) {
        return format!("{v:e}");
    }
    if v.fract() == 0.0 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_owned()
}
