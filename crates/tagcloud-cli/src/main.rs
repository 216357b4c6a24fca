//! Lay out rectangles as a circular tag cloud and save a picture of it.

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tagcloud_core::{Point, Rectangle, Size};
use tagcloud_export::{BitmapVisualizer, CloudVisualizer, ImageFormat, PngCompression};
use tagcloud_layout::CircularCloudLayouter;

use config::{parse_compression, parse_point, parse_size, CloudConfig, Overrides, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with canvas, center, sizes, style and layout settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Rectangle size as WIDTHxHEIGHT; repeat for more rectangles
    #[arg(short, long = "size", value_parser = parse_size)]
    sizes: Vec<Size>,

    /// Canvas size as WIDTHxHEIGHT [default: 800x600]
    #[arg(long, value_parser = parse_size)]
    canvas: Option<Size>,

    /// Cloud center as X,Y [default: canvas middle]
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    center: Option<Point>,

    /// Output image path
    #[arg(short, long, default_value = "cloud.png")]
    output: PathBuf,

    /// Output format (png or svg) [default: from the output extension]
    #[arg(short, long)]
    format: Option<ImageFormat>,

    /// Fail instead of searching forever when a rectangle finds no space
    #[arg(long)]
    max_search_steps: Option<u64>,

    /// PNG compression effort: fast, default or best
    #[arg(long, value_parser = parse_compression)]
    png_compression: Option<PngCompression>,

    /// Log placement details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("tagcloud={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => CloudConfig::load(path)?,
        None => CloudConfig::default(),
    };
    let settings = Settings::resolve(
        config,
        Overrides {
            sizes: args.sizes,
            canvas: args.canvas,
            center: args.center,
            output: args.output,
            format: args.format,
            max_search_steps: args.max_search_steps,
            png_compression: args.png_compression,
        },
    )?;

    run(&settings)
}

fn run(settings: &Settings) -> Result<()> {
    tracing::info!(
        count = settings.sizes.len(),
        center_x = settings.center.x,
        center_y = settings.center.y,
        "laying out cloud"
    );

    let mut layouter = CircularCloudLayouter::with_options(settings.center, settings.layout.clone())?;
    for (index, &size) in settings.sizes.iter().enumerate() {
        layouter
            .place(size)
            .with_context(|| format!("placing rectangle #{index} ({}x{})", size.width, size.height))?;
    }

    let mut visualizer = BitmapVisualizer::new(settings.canvas, settings.style.clone())?
        .with_png_options(settings.png.clone());
    visualizer.add_rectangles(layouter.placed_rectangles());
    visualizer
        .save(&settings.output, settings.format)
        .with_context(|| format!("writing {}", settings.output.display()))?;

    println!("Placed {} rectangles", layouter.len());
    if let Some(bounds) = layouter.bounds() {
        println!(
            "Cloud bounds: {}x{} at ({}, {})",
            bounds.width, bounds.height, bounds.x, bounds.y
        );
        let canvas = Rectangle::new(Point::new(0, 0), settings.canvas);
        if canvas.union(&bounds) != canvas {
            tracing::warn!("cloud extends past the canvas and was cropped");
        }
    }
    println!("Wrote {} ({})", settings.output.display(), settings.format);

    Ok(())
}
