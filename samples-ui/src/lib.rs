//! samples-ui - View components for the sample-code gallery
//!
//! Contains the filter bar, its mobile drawer, the sample grid and the
//! browser glue they need. Components are controlled: selection state is
//! passed in as props and changes flow back out through event handlers.

pub mod components;
pub mod hooks;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use samples_common::{
    FilterBarState, FilterCategory, FilterSelection, SampleItem, SelectionSet, SortOption,
};
