// File: crates/scaling-report/src/data.rs
// Summary: Benchmark results (11th Gen Intel Core i5-1135G7) and the chart built from each.

use std::path::Path;

use scaling_chart::{palette, AnnotationFormat, ChartSpec, ScaleKind, Series};

pub const THREADS: [f64; 4] = [1.0, 2.0, 4.0, 8.0];
pub const RANKS: [f64; 5] = [1.0, 2.0, 4.0, 8.0, 16.0];
pub const WEAK_RANKS: [f64; 3] = [2.0, 4.0, 8.0];

/// Shared-memory runs over one input file size.
pub struct ThreadRun {
    pub size: &'static str,
    pub speedup: [f64; 4],
    pub efficiency: [f64; 4],
}

pub const THREAD_RUNS: [ThreadRun; 3] = [
    ThreadRun {
        size: "Small",
        speedup: [0.9060402685, 1.8, 2.8125, 3.698630137],
        efficiency: [0.9060402685, 0.9, 0.703125, 0.4623287671],
    },
    ThreadRun {
        size: "medium",
        speedup: [0.9851756955, 1.929390681, 3.92919708, 6.805309735],
        efficiency: [0.9851756955, 0.9646953405, 0.9822992701, 0.8506637168],
    },
    ThreadRun {
        size: "large",
        speedup: [0.9803803167, 1.974802254, 3.883116332, 7.044803328],
        efficiency: [0.9803803167, 0.9874011271, 0.9707790829, 0.8806004159],
    },
];

/// Point-to-point MPI runs; rank 1 has no peer, so nothing was measured.
pub struct MpiRun {
    pub size: &'static str,
    pub latency: [Option<f64>; 5],
    pub bandwidth: [Option<f64>; 5],
}

pub const MPI_RUNS: [MpiRun; 2] = [
    MpiRun {
        size: "small",
        latency: [None, Some(0.000002555), Some(0.000003932), Some(0.000003989), Some(0.000013408)],
        bandwidth: [None, Some(2949.51), Some(2351.09), Some(1925.43), Some(1265.93)],
    },
    MpiRun {
        size: "large",
        latency: [None, Some(0.000003107), Some(0.0000044), Some(0.000012172), Some(0.000028289)],
        bandwidth: [None, Some(2563.92), Some(2539.13), Some(1708.34), Some(961.87)],
    },
];

/// Average runtime with 1 MB per rank, medium file.
pub const WEAK_SCALING_MEDIUM: [f64; 3] = [0.005124, 0.008419, 0.012146];

/// One chart to render.
pub struct Job {
    pub series: Series,
    pub spec: ChartSpec,
}

fn present(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

/// Every chart of the report, written under `out_dir`.
pub fn jobs(out_dir: &Path) -> scaling_chart::error::Result<Vec<Job>> {
    let mut jobs = Vec::new();

    for run in &THREAD_RUNS {
        let file = run.size.to_lowercase();
        jobs.push(Job {
            series: Series::from_columns(&THREADS, &present(&run.speedup))?,
            spec: ChartSpec::new(
                format!("Speedup vs Number of Threads ({} File)", run.size),
                out_dir.join(format!("speedup_{file}_file.png")),
            )
            .x_label("Number of Threads")
            .y_label("Speedup")
            .legend("Actual Speedup"),
        });
        jobs.push(Job {
            series: Series::from_columns(&THREADS, &present(&run.efficiency))?,
            spec: ChartSpec::new(
                format!("Efficiency vs Number of Threads ({} File)", run.size),
                out_dir.join(format!("efficiency_{file}_file.png")),
            )
            .x_label("Number of Threads")
            .y_label("Efficiency")
            .y_range(0.0, 1.1)
            .legend("Actual Efficiency")
            .line_color(palette::GREEN),
        });
    }

    for run in &MPI_RUNS {
        jobs.push(Job {
            series: Series::from_columns(&RANKS, &run.latency)?,
            spec: ChartSpec::new(
                "MPI Latency vs Number of Ranks",
                out_dir.join(format!("{}_latency_vs_ranks.png", run.size)),
            )
            .x_label("Number of Ranks")
            .y_label("Latency (seconds)")
            .y_scale(ScaleKind::Log10)
            .annotation(AnnotationFormat::Scientific(2))
            .legend("Latency")
            .line_color(palette::RED),
        });
        jobs.push(Job {
            series: Series::from_columns(&RANKS, &run.bandwidth)?,
            spec: ChartSpec::new(
                "MPI Bandwidth vs Number of Ranks",
                out_dir.join(format!("{}_bandwidth_vs_ranks.png", run.size)),
            )
            .x_label("Number of Ranks")
            .y_label("Bandwidth (MB/s)")
            .legend("Bandwidth")
            .line_color(palette::BLUE),
        });
    }

    jobs.push(Job {
        series: Series::from_columns(&WEAK_RANKS, &present(&WEAK_SCALING_MEDIUM))?,
        spec: ChartSpec::new(
            "Weak Scaling: Medium File (1 MB per rank)",
            out_dir.join("weak_scaling_medium.png"),
        )
        .x_label("Number of MPI Ranks")
        .y_label("Average Runtime (seconds)")
        .annotation(AnnotationFormat::Custom(|t| format!("{t:.3}s")))
        .legend("Avg Runtime"),
    });

    Ok(jobs)
}
