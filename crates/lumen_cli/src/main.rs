mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use lumen_renderer::{cornell_box, render};
use std::time::Instant;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .parse_default_env()
        .init();

    log::info!("Starting Lumen");

    let config = args.render_config()?;

    let start = Instant::now();
    let scene = cornell_box(config.aspect_ratio());
    log::info!("Scene built in {:?}", start.elapsed());

    let start = Instant::now();
    let image = render(&scene, &config)?;
    log::info!("Rendered in {:?}", start.elapsed());

    image::save_buffer(
        &args.output,
        image.as_bytes(),
        image.width,
        image.height,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Saved to {}", args.output.display());

    Ok(())
}
