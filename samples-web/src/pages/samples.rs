//! Sample gallery page
//!
//! Owns the filter selection, derives the visible samples from it and keeps
//! it mirrored in the `state` query parameter.

use crate::demo_data;
use crate::url_state::{decode_selection, encode_selection};
use crate::Route;
use dioxus::prelude::*;
use samples_common::{FilterCategory, FilterSelection, SelectionSet, SortOption};
use samples_ui::stores::{GalleryState, GalleryStateStoreExt};
use samples_ui::{FilterBarView, SampleGridView};
use tracing::{debug, warn};

fn initial_selection(state: Option<&str>) -> FilterSelection {
    let Some(encoded) = state else {
        return FilterSelection::default();
    };
    match decode_selection(encoded) {
        Ok(selection) => selection,
        Err(e) => {
            warn!("Ignoring filter state from URL: {}", e);
            FilterSelection::default()
        }
    }
}

#[component]
pub fn Samples(state: Option<String>) -> Element {
    let selection = use_hook(|| initial_selection(state.as_deref()));
    let gallery = use_store(move || GalleryState {
        samples: demo_data::get_samples(),
        selection: selection.clone(),
    });

    // Mirror selection changes into the URL, skipping the initial render
    let mut is_mounted = use_signal(|| false);
    use_effect(move || {
        let selection = gallery.selection().read().clone();

        if !*is_mounted.peek() {
            is_mounted.set(true);
            return;
        }

        navigator().replace(Route::Samples {
            state: encode_selection(&selection),
        });
    });

    let on_category_change = move |(category, values): (FilterCategory, SelectionSet)| {
        debug!(
            category = category.key(),
            count = values.len(),
            "Filter selection changed"
        );
        gallery.selection().write().set(category, values);
    };

    let on_sort_change = move |sort: SortOption| {
        debug!(sort = sort.label(), "Sort changed");
        gallery.selection().write().sort_by = sort;
    };

    let visible = gallery.read().visible_samples();
    let selection = gallery.selection().read().clone();

    rsx! {
        div { class: "samples-page",
            FilterBarView {
                number_of_items: visible.len(),
                selection,
                on_category_change,
                on_sort_change,
            }
            SampleGridView { items: visible }
        }
    }
}
