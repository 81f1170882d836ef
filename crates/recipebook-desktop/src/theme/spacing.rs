//! Spacing and size constants for the recipe card layout.
//!
//! The card row height is fixed so the list can compute its window from the
//! scroll offset alone; `assets/main.css` uses the same values via the custom
//! properties emitted by [`super::layout_css_vars`].

/// 16px - Gap around each card and padding inside it
pub const SPACE_4: &str = "16px";

/// 20px - Gap between title and image, and between image and description
pub const SPACE_5: &str = "20px";

/// 20px - Card and image corner radius
pub const RADIUS_CARD: &str = "20px";

/// Height of the recipe image
pub const IMAGE_HEIGHT: &str = "300px";

/// Height of one list row: the card plus its outer gap.
///
/// The card is `CARD_ROW_HEIGHT_PX - 2 * SPACE_4` tall with a `SPACE_4` margin
/// on every side. `.recipe-list` is a flex column so those vertical margins
/// do not collapse into each other.
pub const CARD_ROW_HEIGHT_PX: f64 = 560.0;

/// Window height before the scroll container reports its real size
pub const INITIAL_VIEWPORT_HEIGHT_PX: f64 = 800.0;

/// Cards kept alive above and below the visible area
pub const LIST_OVERSCAN: usize = 2;
