use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use response_surface_viewer::config::RenderConfig;
use response_surface_viewer::constants::{CONTOUR_LEVELS, GRID_NX, GRID_NY, SURFACE_POINTS_CSV};
use response_surface_viewer::pipeline;
use response_surface_viewer::viewer::BrowserViewer;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV with x1,x2,y columns written by the surface exporter
    #[arg(short, long, default_value = SURFACE_POINTS_CSV)]
    input: String,

    /// Grid rows, must match the exporter
    #[arg(long, default_value_t = GRID_NX)]
    nx: usize,

    /// Grid columns, must match the exporter
    #[arg(long, default_value_t = GRID_NY)]
    ny: usize,

    #[arg(short, long, default_value_t = CONTOUR_LEVELS,
          value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    levels: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = RenderConfig::new(&args.input)
        .with_shape(args.nx, args.ny)
        .with_contour_levels(args.levels);
    let summary = pipeline::run(&config, &BrowserViewer)
        .with_context(|| format!("failed to render response surface from {}", args.input))?;
    info!("Rendered {}x{} grid", summary.shape.nx, summary.shape.ny);
    Ok(())
}
