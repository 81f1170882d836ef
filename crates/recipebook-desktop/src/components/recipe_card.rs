//! Card component for a single recipe

use dioxus::prelude::*;
use recipebook_core::Recipe;

/// Load state of a card's image, as reported by the webview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Loading,
    Loaded,
    Failed,
}

impl ImageState {
    fn css_class(self) -> &'static str {
        match self {
            ImageState::Loading => "recipe-image recipe-image-loading",
            ImageState::Loaded => "recipe-image",
            ImageState::Failed => "recipe-image recipe-image-failed",
        }
    }
}

/// Text of the position label for the given 1-based day
pub fn day_label(day: usize) -> String {
    format!("Day {day}")
}

/// A card showing the day label, title, image and description of a recipe.
///
/// The image is fetched by the webview. A failed fetch only swaps this card's
/// image for a placeholder; the text still renders.
#[component]
pub fn RecipeCard(recipe: Recipe, day: usize) -> Element {
    let mut image_state = use_signal(|| ImageState::Loading);
    let label = day_label(day);
    let image_url = recipe.image_url().to_string();
    let failed_url = image_url.clone();

    rsx! {
        article {
            class: "recipe-card",

            p {
                class: "recipe-day",
                "{label}"
            }

            h2 {
                class: "recipe-title",
                "{recipe.title()}"
            }

            div {
                class: "recipe-image-frame",

                if image_state() == ImageState::Failed {
                    div {
                        class: "recipe-image-placeholder",
                        title: "Image unavailable",
                    }
                } else {
                    img {
                        class: image_state().css_class(),
                        src: "{image_url}",
                        alt: "Recipe Image",
                        loading: "lazy",
                        decoding: "async",
                        onload: move |_| image_state.set(ImageState::Loaded),
                        onerror: move |_| {
                            tracing::debug!("Image for day {} failed to load: {}", day, failed_url);
                            image_state.set(ImageState::Failed);
                        },
                    }
                }
            }

            p {
                class: "recipe-description",
                "{recipe.description()}"
            }
        }
    }
}
