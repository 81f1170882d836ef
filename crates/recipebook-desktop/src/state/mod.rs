//! Application state handed to the UI at launch
//!
//! Everything here is built once in `main` before the window opens and is
//! read-only afterwards.

pub mod config;

pub use config::{AppConfig, ThemePreference};

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use recipebook_core::Recipe;

/// Relative location of the recipe file shipped with the app
const BUNDLED_RECIPES: &str = "assets/recipes.json";

/// Data the root component needs, provided as launch context
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Recipes in file order, shared by every card
    pub recipes: Arc<[Recipe]>,
    pub theme_preference: ThemePreference,
}

impl AppContext {
    pub fn new(recipes: Vec<Recipe>, theme_preference: ThemePreference) -> Self {
        Self {
            recipes: recipes.into(),
            theme_preference,
        }
    }
}

/// Hook to access the launch context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

/// The recipe file to read for this run
pub fn recipes_path(config: &AppConfig) -> PathBuf {
    config
        .recipes_path
        .clone()
        .unwrap_or_else(bundled_recipes_path)
}

/// The bundled recipe file: next to the executable when installed, otherwise
/// in the crate's asset directory (development builds).
fn bundled_recipes_path() -> PathBuf {
    let installed = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(BUNDLED_RECIPES)));

    match installed {
        Some(path) if path.exists() => path,
        _ => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(BUNDLED_RECIPES),
    }
}
