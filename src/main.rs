#![allow(non_snake_case)]

mod app;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scribe")
    })
}

/// Scribe - rich text composer
#[derive(Parser, Debug)]
#[command(name = "scribe-desktop")]
#[command(about = "Scribe - rich text composer with mentions, emoji and autosave")]
struct Args {
    /// Data directory for autosaved drafts
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Autosave debounce interval in milliseconds
    #[arg(long, default_value_t = 3000)]
    autosave_ms: u64,

    /// Disable autosave entirely
    #[arg(long)]
    no_autosave: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scribe")
    });
    let _ = DATA_DIR.set(data_dir.clone());
    let _ = app::LAUNCH_OPTIONS.set(app::LaunchOptions {
        autosave: !args.no_autosave,
        autosave_ms: args.autosave_ms,
    });

    tracing::info!("Starting Scribe with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Scribe")
            .with_inner_size(dioxus::desktop::LogicalSize::new(640.0, 560.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
