//! Desktop dropdown for one filter category

use crate::components::icons::{ChevronDownIcon, ChevronUpIcon};
use crate::components::option_checkbox::OptionCheckbox;
use dioxus::prelude::*;
use samples_common::{FilterCategory, SelectionSet, ACTIVE_TINT};

/// Collapsible checkbox group.
///
/// Open state is owned by the filter bar so only one box is open at a time.
#[component]
pub fn SelectBox(
    category: FilterCategory,
    /// Currently checked options of this category
    selected: SelectionSet,
    is_open: bool,
    on_header_click: EventHandler<()>,
    on_toggle: EventHandler<&'static str>,
) -> Element {
    let color = header_color(!selected.is_empty());

    rsx! {
        div { class: "select-box-container",
            div {
                class: "select-box",
                style: "color: {color};",
                onclick: move |_| on_header_click.call(()),
                p { class: "select-title", "{category.label()}" }
                div { class: "selection-arrow",
                    if is_open {
                        ChevronUpIcon {}
                    } else {
                        ChevronDownIcon {}
                    }
                }
            }
            if is_open {
                div { class: "select-options-container",
                    div { class: "select-options",
                        for option in category.options().iter().copied() {
                            OptionCheckbox {
                                key: "{option}",
                                value: option,
                                checked: selected.contains(option),
                                on_toggle,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Header text colour: tinted when the category has active selections
pub(crate) fn header_color(has_selection: bool) -> &'static str {
    if has_selection {
        ACTIVE_TINT
    } else {
        "black"
    }
}
