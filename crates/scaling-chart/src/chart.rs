// File: crates/scaling-chart/src/chart.rs
// Summary: ChartRenderer and the headless PNG pipeline using Skia CPU raster surfaces.

use skia_safe as skia;
use tracing::debug;

use crate::error::{RenderError, Result};
use crate::layout::ChartLayout;
use crate::output::write_atomic;
use crate::series::Series;
use crate::spec::{ChartSpec, MarkerShape, MarkerStyle};
use crate::text::{Face, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, ANNOTATION_SIZE, HEIGHT, LABEL_SIZE, LEGEND_SIZE, TICK_SIZE, TITLE_SIZE, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Logical figure width; output pixels are `width * scale`.
    pub width: i32,
    pub height: i32,
    /// Output pixels per logical pixel (3.0 gives a 300 dpi 10x6 inch figure).
    pub scale: f32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text on/off; off gives font-independent pixels for snapshot tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            scale: 1.0,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Surface size in output pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        let s = self.scale.max(0.1);
        (
            ((self.width as f32) * s).round() as i32,
            ((self.height as f32) * s).round() as i32,
        )
    }
}

/// Renders one annotated line chart per call. Holds only options; calls
/// share no mutable state and can run on several threads at once.
#[derive(Clone, Debug, Default)]
pub struct ChartRenderer {
    pub opts: RenderOptions,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    /// Validate and place `series` without drawing.
    pub fn layout(&self, series: &Series, spec: &ChartSpec) -> Result<ChartLayout> {
        ChartLayout::compute(series, spec, &self.opts)
    }

    /// Render the chart and persist it to `spec.output_path` as PNG.
    /// On error no file (partial or temporary) is left behind.
    pub fn render(&self, series: &Series, spec: &ChartSpec) -> Result<()> {
        let bytes = self.render_to_png_bytes(series, spec)?;
        write_atomic(&spec.output_path, &bytes)?;
        debug!("saved chart '{}' to {}", spec.title, spec.output_path.display());
        Ok(())
    }

    /// Render the chart to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, series: &Series, spec: &ChartSpec) -> Result<Vec<u8>> {
        let layout = self.layout(series, spec)?;
        let mut surface = self.draw(&layout, spec)?;

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to an RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, series: &Series, spec: &ChartSpec) -> Result<(Vec<u8>, u32, u32, usize)> {
        let layout = self.layout(series, spec)?;
        let mut surface = self.draw(&layout, spec)?;

        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Encode);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    fn draw(&self, layout: &ChartLayout, spec: &ChartSpec) -> Result<skia::Surface> {
        let opts = &self.opts;
        let (pw, ph) = opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((pw, ph))
            .ok_or(RenderError::Surface { width: pw, height: ph })?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        canvas.clear(theme.background);
        canvas.save();
        canvas.scale((opts.scale.max(0.1), opts.scale.max(0.1)));

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(skia::Rect::from(layout.plot), &bg);

        draw_grid(canvas, layout, theme);
        draw_frame(canvas, layout, theme);

        let color = spec.line_color.unwrap_or(theme.line_stroke);
        canvas.save();
        canvas.clip_rect(skia::Rect::from(layout.plot).with_outset((spec.marker.size, spec.marker.size)), skia::ClipOp::Intersect, true);
        draw_line_series(canvas, layout, color);
        draw_markers(canvas, layout, spec.marker, color);
        canvas.restore();

        if opts.draw_labels {
            let text = TextShaper::new();
            draw_ticks(canvas, &text, layout, theme);
            draw_labels(canvas, &text, layout, spec, theme);
            draw_annotations(canvas, &text, layout, theme);
            if let Some(label) = &spec.legend {
                draw_legend(canvas, &text, layout, label, spec.marker, color, theme);
            }
        }

        canvas.restore();
        Ok(surface)
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    let p = &layout.plot;
    let sx = layout.x_scale();
    let sy = layout.y_scale();
    for &x in &layout.x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, p.top), (px, p.bottom), &paint);
    }
    for &y in &layout.y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((p.left, py), (p.right, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, layout: &ChartLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    canvas.draw_rect(skia::Rect::from(layout.plot), &paint);

    // tick marks, outward
    let p = &layout.plot;
    let sx = layout.x_scale();
    let sy = layout.y_scale();
    for &x in &layout.x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, p.bottom), (px, p.bottom + 4.0), &paint);
    }
    for &y in &layout.y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((p.left - 4.0, py), (p.left, py), &paint);
    }
}

fn draw_line_series(canvas: &skia::Canvas, layout: &ChartLayout, color: skia::Color) {
    let pts = &layout.points;
    if pts.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    path.move_to((pts[0].px, pts[0].py));
    for p in pts.iter().skip(1) {
        path.line_to((p.px, p.py));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}

fn draw_markers(canvas: &skia::Canvas, layout: &ChartLayout, marker: MarkerStyle, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);

    for p in &layout.points {
        draw_marker(canvas, p.px, p.py, marker, &fill);
    }
}

fn draw_marker(canvas: &skia::Canvas, x: f32, y: f32, marker: MarkerStyle, paint: &skia::Paint) {
    let r = (marker.size * 0.5).max(1.0);
    match marker.shape {
        MarkerShape::Circle => {
            canvas.draw_circle((x, y), r, paint);
        }
        MarkerShape::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(x - r, y - r, x + r, y + r), paint);
        }
        MarkerShape::Diamond => {
            let mut path = skia::Path::new();
            path.move_to((x, y - r));
            path.line_to((x + r, y));
            path.line_to((x, y + r));
            path.line_to((x - r, y));
            path.close();
            canvas.draw_path(&path, paint);
        }
        MarkerShape::Triangle => {
            let mut path = skia::Path::new();
            path.move_to((x, y - r));
            path.line_to((x + r, y + r * 0.8));
            path.line_to((x - r, y + r * 0.8));
            path.close();
            canvas.draw_path(&path, paint);
        }
    }
}

fn draw_ticks(canvas: &skia::Canvas, text: &TextShaper, layout: &ChartLayout, theme: &Theme) {
    let p = &layout.plot;
    let sx = layout.x_scale();
    let sy = layout.y_scale();

    for (x, label) in layout.x_ticks.iter().zip(layout.x_tick_labels()) {
        text.draw_centered(canvas, &label, sx.to_px(*x), p.bottom + 8.0 + TICK_SIZE, TICK_SIZE, theme.tick, Face::Numeric);
    }
    for (y, label) in layout.y_ticks.iter().zip(layout.y_tick_labels()) {
        text.draw_right(canvas, &label, p.left - 8.0, sy.to_px(*y) + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, Face::Numeric);
    }
}

fn draw_labels(canvas: &skia::Canvas, text: &TextShaper, layout: &ChartLayout, spec: &ChartSpec, theme: &Theme) {
    let p = &layout.plot;
    if !spec.title.is_empty() {
        text.draw_centered(canvas, &spec.title, p.center_x(), p.top - 18.0, TITLE_SIZE, theme.title, Face::Bold);
    }
    if !spec.x_label.is_empty() {
        text.draw_centered(canvas, &spec.x_label, p.center_x(), p.bottom + 30.0 + LABEL_SIZE, LABEL_SIZE, theme.axis_label, Face::Regular);
    }
    if !spec.y_label.is_empty() {
        let widest = layout
            .y_tick_labels()
            .iter()
            .map(|l| text.measure_width(l, TICK_SIZE, Face::Numeric))
            .fold(0.0f32, f32::max);
        let x = (p.left - 14.0 - widest - LABEL_SIZE * 0.6).max(LABEL_SIZE * 0.6);
        text.draw_vertical(canvas, &spec.y_label, x, p.center_y(), LABEL_SIZE, theme.axis_label, Face::Regular);
    }
}

fn draw_annotations(canvas: &skia::Canvas, text: &TextShaper, layout: &ChartLayout, theme: &Theme) {
    for a in &layout.annotations {
        text.draw_centered(canvas, &a.text, a.px, a.py, ANNOTATION_SIZE, theme.annotation, Face::Numeric);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    text: &TextShaper,
    layout: &ChartLayout,
    label: &str,
    marker: MarkerStyle,
    color: skia::Color,
    theme: &Theme,
) {
    let p = &layout.plot;
    let sample_w = 28.0;
    let pad = 8.0;
    let w = pad * 3.0 + sample_w + text.measure_width(label, LEGEND_SIZE, Face::Regular);
    let h = LEGEND_SIZE + pad * 2.0;
    let left = p.left + 10.0;
    let top = p.top + 10.0;
    let rect = skia::Rect::from_xywh(left, top, w, h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    let rrect = skia::RRect::new_rect_xy(rect, 3.0, 3.0);
    canvas.draw_rrect(rrect, &fill);

    let mut frame = skia::Paint::default();
    frame.set_anti_alias(true);
    frame.set_style(skia::paint::Style::Stroke);
    frame.set_stroke_width(1.0);
    frame.set_color(theme.legend_frame);
    canvas.draw_rrect(rrect, &frame);

    let cy = top + h * 0.5;
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_stroke_width(2.0);
    stroke.set_color(color);
    canvas.draw_line((left + pad, cy), (left + pad + sample_w, cy), &stroke);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_color(color);
    draw_marker(canvas, left + pad + sample_w * 0.5, cy, marker, &dot);

    text.draw_left(canvas, label, left + pad * 2.0 + sample_w, cy + LEGEND_SIZE * 0.35, LEGEND_SIZE, theme.axis_label, Face::Regular);
}
