#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use promptdeck_core::BackendConfig;

/// Global backend configuration, resolved once at launch
static BACKEND_CONFIG: OnceLock<BackendConfig> = OnceLock::new();

/// Get the backend configuration (CLI flag, environment, or default).
pub fn backend_config() -> BackendConfig {
    BACKEND_CONFIG.get().cloned().unwrap_or_default()
}

/// PromptDeck - desktop companion for a local model server
#[derive(Parser, Debug)]
#[command(name = "promptdeck-desktop")]
#[command(about = "PromptDeck - workbench UI for a local inference backend")]
struct Args {
    /// Backend base URL (overrides PROMPTDECK_BACKEND_URL)
    #[arg(short, long)]
    backend_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = match args.backend_url {
        Some(url) => match BackendConfig::parse(&url) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{e}; falling back to environment");
                BackendConfig::from_env()
            }
        },
        None => BackendConfig::from_env(),
    };

    tracing::info!("Starting PromptDeck against {}", config.base_url);
    let _ = BACKEND_CONFIG.set(config);

    let desktop_config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("PromptDeck")
            .with_inner_size(dioxus::desktop::LogicalSize::new(980.0, 760.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .launch(app::App);
}
