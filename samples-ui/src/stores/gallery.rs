//! Gallery state store

use dioxus::prelude::*;
use samples_common::{FilterSelection, SampleItem};

/// State owned by the gallery page and fed to the filter bar
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GalleryState {
    /// All samples, in relevance order
    pub samples: Vec<SampleItem>,
    /// Current filters and sort
    pub selection: FilterSelection,
}

impl GalleryState {
    /// Samples passing the current filters, sorted
    pub fn visible_samples(&self) -> Vec<SampleItem> {
        self.selection.apply(&self.samples)
    }
}
