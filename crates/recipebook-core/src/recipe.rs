//! The recipe record

use serde::Deserialize;

/// A single recipe decoded from the bundled recipe file.
///
/// Records are immutable once constructed. Unknown JSON fields are ignored;
/// all three known fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    title: String,
    description: String,
    image_url: String,
}

impl Recipe {
    /// Create a recipe from its parts
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Opaque image locator, passed through to the image loader untouched
    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

/// 1-based day number for the recipe at `index` in the loaded sequence
pub fn day_number(index: usize) -> usize {
    index + 1
}
