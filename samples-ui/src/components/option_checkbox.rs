//! Checkbox row for a single filter option

use dioxus::prelude::*;

/// A labelled checkbox; reports its value on every change
#[component]
pub fn OptionCheckbox(
    value: &'static str,
    checked: bool,
    on_toggle: EventHandler<&'static str>,
    #[props(default = "select-option")] class: &'static str,
) -> Element {
    rsx! {
        label { class,
            input {
                r#type: "checkbox",
                value,
                checked,
                onchange: move |_| on_toggle.call(value),
            }
            "{value}"
        }
    }
}
