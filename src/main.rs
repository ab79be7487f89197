//! Lumina Studio
//!
//! A mock non-linear video editor with an AI assistant for storyboards and
//! generative video.

mod app;
mod components;
mod config;
mod constants;
mod core;
mod error;
mod hotkeys;
mod providers;
mod state;
mod timeline;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app_config = config::AppConfig::from_env();
    log::info!("Starting {} with {:?}", constants::PRODUCT_NAME, app_config);
    if !app_config.has_credential() {
        log::warn!("No AI credential configured; set API_KEY to enable the assistant");
    }

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(constants::PRODUCT_NAME)
                .with_inner_size(LogicalSize::new(1440.0, 900.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(app_config)
        .launch(app::App);
}
