//! Empty state component shown when the recipe file has no entries

use dioxus::prelude::*;

/// Component displayed instead of the list when there are zero recipes
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div {
            class: "empty-state",

            h2 {
                class: "empty-state-title",
                "No Recipes Yet"
            }

            p {
                class: "empty-state-description",
                "The recipe file is empty. Add recipes to it and restart the app."
            }
        }
    }
}
