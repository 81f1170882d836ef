//! Recipebook - a day-by-day recipe viewer
//!
//! Loads the bundled recipe file once at startup and shows it as a scrolling
//! list of cards in a Dioxus desktop window.

#![forbid(unsafe_code)]

mod app;
mod components;
mod error;
mod state;
mod theme;

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use error::{StartupError, UserFacingError};
use state::{AppConfig, AppContext};

fn main() -> ExitCode {
    // Initialize tracing for logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("recipebook_desktop=info,recipebook_core=info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    tracing::info!("Starting Recipebook");

    let (config, config_status) = AppConfig::load_with_status();
    if let Some(warning) = config_status.warning_message() {
        tracing::warn!("Config load issue: {}", warning);
    }

    let context = match load_context(&config) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", UserFacingError::from(&e));
            return ExitCode::FAILURE;
        }
    };

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::new()
        .with_cfg(
            dioxus::desktop::Config::new().with_window(
                dioxus::desktop::WindowBuilder::new()
                    .with_title("Recipes")
                    .with_inner_size(dioxus::desktop::LogicalSize::new(480.0, 860.0))
                    .with_min_inner_size(dioxus::desktop::LogicalSize::new(360.0, 480.0))
                    .with_resizable(true),
            ),
        )
        .with_context(context)
        .launch(app::App);

    ExitCode::SUCCESS
}

/// Read the recipes exactly once and package them for the UI
fn load_context(config: &AppConfig) -> Result<AppContext, StartupError> {
    let path = state::recipes_path(config);
    tracing::info!("Loading recipes from {}", path.display());
    let recipes = recipebook_core::load_recipes(&path)?;
    Ok(AppContext::new(recipes, config.theme))
}
