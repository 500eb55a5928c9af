mod app;
mod controller;
mod physics;
mod thoughts;
mod util;

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use controller::{Location, Variant};
use thoughts::{load_seeds, sample_seeds};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Visualization to open.
    #[arg(long, value_enum, default_value_t = Variant::Planet)]
    variant: Variant,

    /// JSON array of thoughts to show instead of the built-in samples.
    #[arg(long)]
    thoughts: Option<PathBuf>,

    /// Thought id to open on startup, as if following a shared link.
    #[arg(long)]
    select: Option<String>,

    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    #[arg(long, default_value_t = 860.0)]
    height: f32,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("thought_planet={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let seeds = match &args.thoughts {
        Some(path) => load_seeds(path)?,
        None => sample_seeds(args.variant),
    };

    let mut location = Location::for_view(args.variant.label())
        .with_context(|| format!("failed to build the address of the {} view", args.variant))?;
    if let Some(id) = &args.select {
        location.select(id);
    }
    info!(variant = %args.variant, thoughts = seeds.len(), address = location.href(), "starting");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height]),
        ..Default::default()
    };

    let variant = args.variant;
    eframe::run_native(
        "thought-planet",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::ThoughtsApp::new(
                cc, variant, seeds, location,
            )))
        }),
    )
    .map_err(|error| anyhow!("viewer exited with an error: {error}"))
}
