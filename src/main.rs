//! skd-window - open a fixed-size X11 window and wait for it to be closed.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use skd_window::config::Config;
use skd_window::PlatformWindow;

/// Interval between event polls
const POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "skd-window")]
#[command(about = "Open a fixed-size X11 window until the user closes it")]
struct Cli {
    /// Window title
    #[arg(long)]
    title: Option<String>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u16>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u16>,

    /// X display to connect to (defaults to $DISPLAY)
    #[arg(long)]
    display: Option<String>,

    /// Config file (defaults to ~/.config/skd-window/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };

    // Command line overrides the file
    let mut window_config = config.window;
    if let Some(title) = cli.title {
        window_config.title = title;
    }
    if let Some(width) = cli.width {
        window_config.width = width;
    }
    if let Some(height) = cli.height {
        window_config.height = height;
    }
    if cli.display.is_some() {
        window_config.display = cli.display;
    }

    let mut window = match PlatformWindow::with_config(&window_config) {
        Ok(window) => window,
        Err(e) => {
            log::error!("Window setup failed with code {}: {}", e.code().raw(), e);
            return Err(e).context("Failed to create window");
        }
    };

    log::info!("Waiting for close request");
    while !window.poll_events() {
        std::thread::sleep(POLL_INTERVAL);
    }

    log::info!("Close requested, exiting");
    window.terminate_window();
    Ok(())
}
