//! Main application component and layout

use dioxus::desktop::tao::window::Theme as WindowTheme;
use dioxus::prelude::*;
use recipebook_core::{Theme, resolve_theme};

use crate::components::RecipeList;
use crate::state::use_app_context;
use crate::theme::{layout_css_vars, theme_css_vars};

/// Stylesheet asset
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root application component
#[component]
pub fn App() -> Element {
    let context = use_app_context();

    // Sampled once; later appearance changes are not followed
    let theme: Theme = use_hook(|| {
        let system_is_dark = system_prefers_dark();
        let theme = resolve_theme(context.theme_preference.prefers_dark(system_is_dark));
        tracing::info!(
            "Using {} theme (preference: {}, system dark: {})",
            if theme.is_dark() { "dark" } else { "light" },
            context.theme_preference.display_name(),
            system_is_dark
        );
        theme
    });

    let root_style = format!("{} {}", theme_css_vars(&theme), layout_css_vars());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "app-root",
            style: "{root_style}",

            RecipeList { recipes: context.recipes.clone() }
        }
    }
}

/// Current appearance of the host window
fn system_prefers_dark() -> bool {
    matches!(dioxus::desktop::window().theme(), WindowTheme::Dark)
}
