// File: crates/scaling-chart/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use scaling_chart::{palette, theme, ChartRenderer, ChartSpec, MarkerShape, MarkerStyle, RenderOptions, Series};

fn efficiency() -> Series {
    Series::new(vec![(1.0, 0.9803803167), (2.0, 0.9874011271), (4.0, 0.9707790829), (8.0, 0.8806004159)]).unwrap()
}

fn no_text() -> RenderOptions {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    opts
}

fn pixel(px: &[u8], stride: usize, x: usize, y: usize) -> [u8; 4] {
    let i = y * stride + x * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let spec = ChartSpec::new("Efficiency", "unused.png").y_range(0.0, 1.1);
    let (px, w, h, stride) = ChartRenderer::new(no_text()).render_to_rgba8(&efficiency(), &spec).expect("rgba render");
    assert_eq!((w, h), (1000, 600));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // light theme background in the top-left corner
    assert_eq!(pixel(&px, stride, 0, 0), [255, 255, 255, 255]);
}

#[test]
fn markers_use_the_line_color() {
    let renderer = ChartRenderer::new(no_text());
    let spec = ChartSpec::new("Efficiency", "unused.png").y_range(0.0, 1.1).line_color(palette::GREEN);
    let layout = renderer.layout(&efficiency(), &spec).unwrap();
    let (px, _, _, stride) = renderer.render_to_rgba8(&efficiency(), &spec).unwrap();

    let green = [palette::GREEN.r(), palette::GREEN.g(), palette::GREEN.b(), 255];
    for p in &layout.points {
        assert_eq!(pixel(&px, stride, p.px as usize, p.py as usize), green, "marker at {p:?}");
    }
}

#[test]
fn square_and_triangle_markers_fill_their_centre() {
    let renderer = ChartRenderer::new(no_text());
    let orange = [palette::ORANGE.r(), palette::ORANGE.g(), palette::ORANGE.b(), 255];
    for shape in [MarkerShape::Square, MarkerShape::Triangle] {
        let spec = ChartSpec::new("Efficiency", "unused.png")
            .y_range(0.0, 1.1)
            .line_color(palette::ORANGE)
            .marker(MarkerStyle::new(shape, 12.0));
        let layout = renderer.layout(&efficiency(), &spec).unwrap();
        let (px, _, _, stride) = renderer.render_to_rgba8(&efficiency(), &spec).unwrap();
        for p in &layout.points {
            assert_eq!(pixel(&px, stride, p.px as usize, p.py as usize), orange, "{shape:?} at {p:?}");
        }
    }
}

#[test]
fn theme_sets_background() {
    let mut opts = no_text();
    opts.theme = theme::find("dark");
    let spec = ChartSpec::new("Speedup", "unused.png");
    let (px, _, _, stride) = ChartRenderer::new(opts).render_to_rgba8(&efficiency(), &spec).unwrap();
    assert_eq!(pixel(&px, stride, 2, 2), [18, 18, 20, 255]);
}

#[test]
fn unknown_theme_falls_back_to_light() {
    assert_eq!(theme::find("nope").name, "light");
    assert_eq!(theme::find("DARK").name, "dark");
}
