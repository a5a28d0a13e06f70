// File: crates/scaling-chart/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; titles, labels, ticks and annotations.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    /// Tabular digits for tick labels and annotations.
    Numeric,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, face: Face) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        match face {
            Face::Numeric => {
                ts.set_font_families(&["DejaVu Sans", "Roboto", "Segoe UI", "Helvetica", "Arial", "sans-serif"]);
                ts.add_font_feature("tnum", 1);
            }
            Face::Regular | Face::Bold => {
                ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
            }
        }
        if face == Face::Bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, face: Face) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, face);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, face: Face) -> f32 {
        let p = self.layout(text, size, skia::Color::TRANSPARENT, face);
        p.longest_line()
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, face: Face) {
        let mut p = self.layout(text, size, color, face);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw with the baseline at `y`, ending at `x`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, face: Face) {
        let mut p = self.layout(text, size, color, face);
        let w = p.longest_line();
        p.paint(canvas, (x - w, y - size * 0.8));
    }

    /// Draw with the baseline at `y`, horizontally centred on `x`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, face: Face) {
        let mut p = self.layout(text, size, color, face);
        let w = p.longest_line();
        p.paint(canvas, (x - w * 0.5, y - size * 0.8));
    }

    /// Draw rotated 90° counter-clockwise, centred on `(x, y)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, face: Face) {
        let mut p = self.layout(text, size, color, face);
        let w = p.longest_line();
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, -size * 0.5));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
