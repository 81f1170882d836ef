//! Theme rendering for the webview.
//!
//! The resolved [`Theme`] is turned into CSS custom properties and set inline
//! on the root element. `assets/main.css` only refers to `var(--name)`, so
//! components never look up colors themselves.

mod spacing;

pub use spacing::*;

use recipebook_core::Theme;

/// CSS custom properties for `theme`, suitable for a `style` attribute
pub fn theme_css_vars(theme: &Theme) -> String {
    let palette = &theme.palette;
    let typography = &theme.typography;
    format!(
        "--color-primary: {}; --color-on-primary: {}; --color-background: {}; \
         --color-on-background: {}; --color-image-placeholder: {}; \
         --font-family: {}; --font-size-label: {}px; --font-size-title: {}px; \
         --font-weight-title: {}; --font-size-body: {}px; color-scheme: {};",
        palette.primary,
        palette.on_primary,
        palette.background,
        palette.on_background,
        palette.image_placeholder,
        typography.font_family,
        typography.label_size,
        typography.title_size,
        typography.title_weight,
        typography.body_size,
        if theme.is_dark() { "dark" } else { "light" },
    )
}

/// CSS custom properties for the fixed card geometry
pub fn layout_css_vars() -> String {
    format!(
        "--space-4: {SPACE_4}; --space-5: {SPACE_5}; --radius-card: {RADIUS_CARD}; \
         --image-height: {IMAGE_HEIGHT}; --card-row-height: {CARD_ROW_HEIGHT_PX}px;"
    )
}
