// File: crates/scaling-report/src/main.rs
// Summary: Renders every benchmark chart (speedup, efficiency, MPI latency/bandwidth, weak scaling) to PNGs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use scaling_chart::{theme, ChartRenderer, RenderOptions};
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

mod data;

#[derive(Parser)]
#[command(about = "Render the benchmark scaling charts")]
struct Cli {
    /// Directory the PNGs are written to
    #[arg(short, long, default_value = "plots")]
    out_dir: PathBuf,
    /// Color theme (light, dark)
    #[arg(short, long, default_value = "light")]
    theme: String,
    /// Output pixels per logical pixel; 3.0 gives 3000x1800 images
    #[arg(short, long, default_value_t = 3.0)]
    scale: f32,
    /// Extra tracing directives, e.g. `scaling_chart=debug`
    #[arg(short, long)]
    log: Vec<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(&args.log)?;

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&args.theme);
    opts.scale = args.scale;
    let renderer = ChartRenderer::new(opts);

    let jobs = data::jobs(&args.out_dir).context("building chart data")?;
    info!("rendering {} charts into {}", jobs.len(), args.out_dir.display());

    let failed = jobs
        .into_par_iter()
        .filter(|job| match renderer.render(&job.series, &job.spec) {
            Ok(()) => {
                println!("Plot saved as '{}'", job.spec.output_path.display());
                false
            }
            Err(err) => {
                error!("{}: {err}", job.spec.output_path.display());
                true
            }
        })
        .count();

    if failed > 0 {
        anyhow::bail!("{failed} chart(s) failed to render");
    }
    Ok(())
}

fn init_logging(directives: &[String]) -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let mut env_filter = EnvFilter::new(format!("scaling_report={log_level}"))
        .add_directive(format!("scaling_chart={log_level}").parse()?);
    for directive in directives {
        env_filter = env_filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_writer(std::io::stderr)
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .init();
    Ok(())
}
