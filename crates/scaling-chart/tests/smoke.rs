// File: crates/scaling-chart/tests/smoke.rs
// Purpose: End-to-end renders writing PNGs, including overwrite and parallel calls.

use scaling_chart::{AnnotationFormat, ChartRenderer, ChartSpec, RenderOptions, Series};
use std::path::PathBuf;

fn out(name: &str) -> PathBuf {
    let p = PathBuf::from("target/test_out").join(name);
    std::fs::create_dir_all(p.parent().unwrap()).unwrap();
    let _ = std::fs::remove_file(&p);
    p
}

fn speedup() -> Series {
    Series::new(vec![(1.0, 0.98), (2.0, 1.97), (4.0, 3.88), (8.0, 7.04)]).expect("valid series")
}

#[test]
fn render_speedup_png() {
    let path = out("smoke_speedup.png");
    let spec = ChartSpec::new("Speedup", &path)
        .x_label("Number of Threads")
        .y_label("Speedup")
        .legend("Actual Speedup");
    let renderer = ChartRenderer::default();

    renderer.render(&speedup(), &spec).expect("render should succeed");
    let meta = std::fs::metadata(&path).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let layout = renderer.layout(&speedup(), &spec).expect("layout");
    let texts: Vec<_> = layout.annotations.iter().map(|a| a.text.as_str()).collect();
    assert_eq!(texts, ["0.98", "1.97", "3.88", "7.04"]);
}

#[test]
fn render_twice_overwrites() {
    let path = out("smoke_twice.png");
    let spec = ChartSpec::new("Speedup", &path);
    let renderer = ChartRenderer::default();

    renderer.render(&speedup(), &spec).expect("first render");
    renderer.render(&speedup(), &spec).expect("second render");
    assert!(path.exists());

    // no temporary siblings left behind
    let leftovers = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with(".smoke_twice.png"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn render_creates_missing_parent_dirs() {
    let dir = PathBuf::from("target/test_out/nested/a/b");
    let _ = std::fs::remove_dir_all("target/test_out/nested");
    let path = dir.join("chart.png");
    ChartRenderer::default()
        .render(&speedup(), &ChartSpec::new("Nested", &path))
        .expect("render");
    assert!(path.exists());
}

#[test]
fn png_bytes_match_surface_scale() {
    let mut opts = RenderOptions::default();
    opts.width = 400;
    opts.height = 240;
    opts.scale = 2.0;
    let spec = ChartSpec::new("Scaled", "unused.png").annotation(AnnotationFormat::Fixed(1));
    let bytes = ChartRenderer::new(opts).render_to_png_bytes(&speedup(), &spec).expect("bytes");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (800, 480));
}

#[test]
fn parallel_renders_to_distinct_paths() {
    let renderer = ChartRenderer::default();
    let paths: Vec<PathBuf> = (0..4).map(|i| out(&format!("parallel_{i}.png"))).collect();
    std::thread::scope(|s| {
        for (i, path) in paths.iter().enumerate() {
            let renderer = &renderer;
            s.spawn(move || {
                let series = Series::new(vec![(1.0, 1.0 + i as f64), (2.0, 2.0 + i as f64)]).unwrap();
                renderer.render(&series, &ChartSpec::new(format!("Chart {i}"), path)).unwrap();
            });
        }
    });
    for p in &paths {
        assert!(p.exists(), "{} missing", p.display());
    }
}

#[test]
fn concurrent_renders_to_one_path_leave_a_whole_png() {
    let path = out("shared_target.png");
    let renderer = ChartRenderer::default();
    std::thread::scope(|s| {
        for i in 0..4 {
            let (renderer, path) = (&renderer, &path);
            s.spawn(move || {
                let series = Series::new(vec![(1.0, 1.0), (2.0, 2.0 + i as f64)]).unwrap();
                let spec = ChartSpec::new(format!("Writer {i}"), "placeholder.png").output_path(path);
                renderer.render(&series, &spec).unwrap();
            });
        }
    });

    let img = image::open(&path).expect("final file decodes");
    assert_eq!((img.width(), img.height()), (1000, 600));
    let leftovers = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with(".shared_target.png"))
        .count();
    assert_eq!(leftovers, 0);
}
