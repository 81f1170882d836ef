//! Lazily rendered, vertically scrolling list of recipe cards

use std::ops::Range;
use std::sync::Arc;

use dioxus::prelude::*;
use recipebook_core::{Recipe, Viewport, day_number};

use crate::components::{EmptyState, RecipeCard};
use crate::theme::{CARD_ROW_HEIGHT_PX, INITIAL_VIEWPORT_HEIGHT_PX, LIST_OVERSCAN};

/// Recipes inside `window`, paired with their day number.
///
/// Indices past the end of `recipes` are ignored.
pub fn window_cards(recipes: &[Recipe], window: Range<usize>) -> impl Iterator<Item = (usize, &Recipe)> {
    recipes
        .iter()
        .enumerate()
        .skip(window.start)
        .take(window.len())
        .map(|(index, recipe)| (day_number(index), recipe))
}

/// Viewport for the card rows, sized for a container that has not been
/// measured yet
pub fn list_viewport() -> Viewport {
    Viewport::new(CARD_ROW_HEIGHT_PX, INITIAL_VIEWPORT_HEIGHT_PX).with_overscan(LIST_OVERSCAN)
}

/// Scrollable list with one card per recipe, in input order.
///
/// Only the cards in the viewport's current window exist in the DOM; spacers
/// stand in for the rest so the scrollbar reflects the full list.
#[component]
pub fn RecipeList(recipes: Arc<[Recipe]>) -> Element {
    let base_viewport = use_hook(list_viewport);
    let mut scroll_top = use_signal(|| 0.0_f64);
    let mut viewport_height = use_signal(|| base_viewport.viewport_height());

    if recipes.is_empty() {
        return rsx! { EmptyState {} };
    }

    let len = recipes.len();
    let viewport = base_viewport.with_viewport_height(viewport_height());
    let window = viewport.visible_range(scroll_top(), len);
    let leading = viewport.leading_space(&window);
    let trailing = viewport.trailing_space(&window, len);

    rsx! {
        div {
            class: "recipe-list",
            onmounted: move |evt: MountedEvent| async move {
                match evt.data().get_client_rect().await {
                    Ok(rect) => viewport_height.set(rect.size.height),
                    Err(e) => tracing::warn!("Could not measure recipe list: {:?}", e),
                }
            },
            onscroll: move |evt: ScrollEvent| {
                let data = evt.data();
                scroll_top.set(data.scroll_top());
                viewport_height.set(f64::from(data.client_height()));
            },

            div {
                class: "recipe-list-spacer",
                style: "height: {leading}px;",
            }

            for (day, recipe) in window_cards(&recipes, window) {
                RecipeCard {
                    key: "{day}",
                    recipe: recipe.clone(),
                    day,
                }
            }

            div {
                class: "recipe-list-spacer",
                style: "height: {trailing}px;",
            }
        }
    }
}
