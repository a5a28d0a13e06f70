// File: crates/scaling-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic charts (no text) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the pixel compare; the goldens under
//   tests/__snapshots__ are not committed, so a fresh checkout only checks
//   that the PNG decodes at the default figure size until it is blessed.

use scaling_chart::{palette, ChartRenderer, ChartSpec, MarkerShape, MarkerStyle, RenderOptions, ScaleKind, Series};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
    assert_eq!(got_img.dimensions(), (1000, 600), "{name}: unexpected figure size");

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(series: &Series, spec: &ChartSpec) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    ChartRenderer::new(opts).render_to_png_bytes(series, spec).expect("render bytes")
}

#[test]
fn golden_speedup() {
    let series = Series::new(vec![(1.0, 0.9851756955), (2.0, 1.929390681), (4.0, 3.92919708), (8.0, 6.805309735)]).unwrap();
    let spec = ChartSpec::new("Speedup", "unused.png");
    write_or_compare("speedup.png", &render_bytes(&series, &spec));
}

#[test]
fn golden_log_latency() {
    let series = Series::from_columns(
        &[1.0, 2.0, 4.0, 8.0, 16.0],
        &[None, Some(0.000003107), Some(0.0000044), Some(0.000012172), Some(0.000028289)],
    )
    .unwrap();
    let spec = ChartSpec::new("Latency", "unused.png")
        .y_scale(ScaleKind::Log10)
        .line_color(palette::RED)
        .marker(MarkerStyle::new(MarkerShape::Diamond, 9.0));
    write_or_compare("latency_log.png", &render_bytes(&series, &spec));
}
