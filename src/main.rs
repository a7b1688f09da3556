#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Featured display cap override, set from the command line
static MAX_FEATURED: OnceLock<usize> = OnceLock::new();

/// Get the featured display cap override (if set from the command line)
pub fn max_featured_override() -> Option<usize> {
    MAX_FEATURED.get().copied()
}

/// Driftwood - desktop reader for the content site
#[derive(Parser, Debug)]
#[command(name = "driftwood-desktop")]
#[command(about = "Driftwood - papers, theories, and poems in one window")]
struct Args {
    /// Maximum number of featured cards on the home page
    #[arg(short, long)]
    max_featured: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(max) = args.max_featured {
        let _ = MAX_FEATURED.set(max);
    }

    let window_width = 960.0;
    let window_height = 900.0;

    tracing::info!(
        "Starting Driftwood (featured cap override: {:?})",
        args.max_featured
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Driftwood")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
