//! Pure filter and gallery logic shared by the UI and the web app.
//!
//! Nothing here touches the DOM, so every state transition the filter bar
//! performs can be unit tested without a renderer.

pub mod bar_state;
pub mod category;
pub mod sample;
pub mod selection;
pub mod sort;

pub use bar_state::{DrawerOutcome, DrawerPhase, FilterBarState, DRAWER_ANIMATION_MS};
pub use category::FilterCategory;
pub use sample::SampleItem;
pub use selection::{FilterSelection, SelectionSet};
pub use sort::SortOption;

/// Text colour for a category header that has active selections
pub const ACTIVE_TINT: &str = "#3B00B9";
