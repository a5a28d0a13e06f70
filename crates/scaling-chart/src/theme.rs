// File: crates/scaling-chart/src/theme.rs
// Summary: Light/Dark figure colors plus a small palette for series strokes.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    /// Grid lines; alpha is part of the color.
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub title: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub annotation: skia::Color,
    pub line_stroke: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_fill: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(77, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 30, 30, 30),
            title: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 20, 20, 20),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            annotation: skia::Color::from_argb(255, 20, 20, 20),
            line_stroke: palette::BLUE,
            legend_frame: skia::Color::from_argb(255, 204, 204, 204),
            legend_fill: skia::Color::from_argb(204, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(90, 90, 90, 100),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            title: skia::Color::from_argb(255, 240, 240, 245),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            annotation: skia::Color::from_argb(255, 220, 220, 230),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            legend_frame: skia::Color::from_argb(255, 70, 70, 80),
            legend_fill: skia::Color::from_argb(204, 30, 30, 34),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Series stroke colors.
pub mod palette {
    use skia_safe::Color;

    pub const BLUE: Color = Color::from_argb(255, 31, 119, 180);
    pub const ORANGE: Color = Color::from_argb(255, 255, 127, 14);
    pub const GREEN: Color = Color::from_argb(255, 44, 160, 44);
    pub const RED: Color = Color::from_argb(255, 214, 39, 40);
}
