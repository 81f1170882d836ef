//! Core data and layout logic for Recipebook.
//!
//! This crate has no GUI dependency. It owns the recipe record, the loader for
//! the bundled recipe file, the windowing math used by the lazy recipe list,
//! and the light/dark theme tokens.

#![forbid(unsafe_code)]

pub mod loader;
pub mod recipe;
pub mod theme;
pub mod viewport;

pub use loader::{LoadError, MalformedData, load_recipes, parse_recipes};
pub use recipe::{Recipe, day_number};
pub use theme::{Palette, Theme, ThemePreference, Typography, resolve_theme};
pub use viewport::Viewport;
