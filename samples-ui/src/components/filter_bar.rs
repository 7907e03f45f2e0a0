//! Filter bar for the sample gallery - pure rendering, state owned by the caller
//!
//! ## Controlled Props Pattern
//! The selection lives in the hosting page. The bar only keeps UI-local state
//! (which dropdown is open, drawer phase) and reports every change through
//! `on_category_change` / `on_sort_change`.
//!
//! ## Dismissal
//! A document click listener closes the open dropdown when the click lands
//! outside the select boxes. It is attached after mount and detached on unmount.

use std::rc::Rc;

use crate::components::icons::{FilterIcon, TrashIcon};
use crate::components::mobile_filter_drawer::MobileFilterDrawer;
use crate::components::select_box::SelectBox;
use crate::hooks::{use_delayed_action, use_outside_click};
use crate::wasm_utils::scroll_to_anchor;
use dioxus::prelude::*;
use samples_common::{
    DrawerOutcome, DrawerPhase, FilterBarState, FilterCategory, FilterSelection, SelectionSet,
    SortOption, DRAWER_ANIMATION_MS,
};
use tracing::debug;

/// Anchor placed before the bar; drawer actions scroll back to it
pub const START_ANCHOR_ID: &str = "start";

const TITLE: &str = "Sample codes";

#[component]
pub fn FilterBarView(
    /// Number of samples currently shown
    number_of_items: usize,
    /// Current filters and sort, owned by the caller
    selection: FilterSelection,
    /// Replace one category's selection set
    on_category_change: EventHandler<(FilterCategory, SelectionSet)>,
    on_sort_change: EventHandler<SortOption>,
) -> Element {
    let mut bar_state = use_signal(FilterBarState::new);
    let mut select_boxes: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    use_outside_click(
        select_boxes,
        use_callback(move |()| {
            if bar_state.peek().current_selection().is_some() {
                bar_state.write().outside_click();
            }
        }),
    );

    let current = selection.clone();
    let toggle_option = use_callback(move |(category, value): (FilterCategory, &'static str)| {
        let next = current.toggled(category, value);
        debug!(category = category.key(), value, "Toggled filter option");
        on_category_change.call((category, next));
    });

    let reset_selection = use_callback(move |()| {
        debug!("Clearing all filters");
        for category in FilterCategory::ALL {
            on_category_change.call((category, SelectionSet::new()));
        }
        on_sort_change.call(SortOption::default());
    });

    let clear_filters = use_callback(move |()| {
        reset_selection.call(());
        bar_state.write().clear_all();
    });

    let (start_exit, cancel_exit) = use_delayed_action(
        DRAWER_ANIMATION_MS,
        use_callback(move |()| bar_state.write().finish_drawer_exit()),
    );

    let open_drawer = move |_: MouseEvent| {
        cancel_exit.call(());
        bar_state.write().open_drawer();
    };

    let close_drawer = use_callback(move |()| {
        bar_state.write().close_drawer();
        start_exit.call(());
    });

    // Apply and Clear both close the drawer and scroll back to the top of the gallery
    let finish_drawer_action = use_callback(move |outcome: DrawerOutcome| {
        if outcome == DrawerOutcome::Reset {
            reset_selection.call(());
        }
        start_exit.call(());
        scroll_to_anchor(START_ANCHOR_ID);
    });

    let state = bar_state();
    let has_active_filters = selection.has_active_filters();

    rsx! {
        a { id: START_ANCHOR_ID }
        div { class: "filter-bar",
            div { class: "filter-bar-header",
                span { class: "title", "{TITLE}" }
                span { class: "number-of-items", "{number_of_items}" }
            }
            div { class: "mobile-filter-bar-header", onclick: open_drawer,
                div { class: "filter-icon", FilterIcon {} }
                span { class: "title", "{TITLE}" }
                span { class: "number-of-items", "{number_of_items}" }
            }
            div {
                class: "select-boxes",
                onmounted: move |evt: MountedEvent| select_boxes.set(Some(evt.data())),
                for category in FilterCategory::ALL {
                    SelectBox {
                        key: "{category.key()}",
                        category,
                        selected: selection.get(category).clone(),
                        is_open: state.is_open(category),
                        on_header_click: move |_| bar_state.write().toggle_dropdown(category),
                        on_toggle: move |value: &'static str| {
                            toggle_option.call((category, value))
                        },
                    }
                }
                if has_active_filters {
                    div {
                        class: "clear-filters",
                        onclick: move |_| clear_filters.call(()),
                        p { "Delete all filters" }
                        TrashIcon {}
                    }
                }
            }
        }
        div { class: "mobile-filter-bar-button-container",
            div { class: "mobile-filter-bar-button", onclick: open_drawer,
                div { class: "filter-icon", FilterIcon {} }
                span { class: "title", "{TITLE}" }
                span { class: "number-of-items", "{number_of_items}" }
            }
        }
        if state.drawer_visible() {
            MobileFilterDrawer {
                selection: selection.clone(),
                closing: state.drawer() == DrawerPhase::Closing,
                on_toggle: toggle_option,
                on_close: move |_| close_drawer.call(()),
                on_apply: move |_| {
                    let outcome = bar_state.write().apply_drawer();
                    finish_drawer_action.call(outcome);
                },
                on_clear: move |_| {
                    let outcome = bar_state.write().clear_drawer();
                    finish_drawer_action.call(outcome);
                },
            }
        }
    }
}
