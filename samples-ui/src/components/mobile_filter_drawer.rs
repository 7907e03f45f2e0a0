//! Slide-in filter panel for narrow screens
//!
//! Shows every category as a flat checkbox group (no collapsible boxes).
//! Mounted by the filter bar while its drawer phase is `Open` or `Closing`;
//! the slide direction comes from the `closing` flag.

use crate::components::icons::XIcon;
use crate::components::option_checkbox::OptionCheckbox;
use dioxus::prelude::*;
use samples_common::{FilterCategory, FilterSelection};

#[component]
pub fn MobileFilterDrawer(
    selection: FilterSelection,
    /// True while the exit animation runs
    closing: bool,
    on_toggle: EventHandler<(FilterCategory, &'static str)>,
    /// Close icon: dismiss without touching the selection
    on_close: EventHandler<()>,
    on_apply: EventHandler<()>,
    on_clear: EventHandler<()>,
) -> Element {
    let animation_class = if closing {
        "drawer-slide-out"
    } else {
        "drawer-slide-in"
    };

    rsx! {
        div { class: "mobile-filter-bar {animation_class}",
            div { class: "mobile-filter-container",
                div { class: "close-icon", onclick: move |_| on_close.call(()), XIcon {} }
                p { class: "mobile-filter-title", "Sample codes" }
                div { class: "mobile-select-container",
                    for category in FilterCategory::ALL {
                        div { key: "{category.key()}", class: "mobile-filter-group",
                            p { "{category.label()}" }
                            div { class: "mobile-filter-options",
                                for option in category.options().iter().copied() {
                                    OptionCheckbox {
                                        key: "{option}",
                                        value: option,
                                        checked: selection.get(category).contains(option),
                                        on_toggle: move |value: &'static str| {
                                            on_toggle.call((category, value))
                                        },
                                    }
                                }
                            }
                        }
                    }
                    button {
                        class: "mobile-filter-button",
                        onclick: move |_| on_apply.call(()),
                        span { "Apply Filters" }
                    }
                    button {
                        class: "mobile-filter-clear-button",
                        onclick: move |_| on_clear.call(()),
                        span { "Clear Filters" }
                    }
                }
            }
        }
    }
}
