//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep that closure
//! alive for as long as it is attached. `closure.forget()` would leak it and
//! leave the listener attached forever, so the closure is stored in a struct
//! whose `Drop` removes the listener:
//!
//! ```ignore
//! let listener = DocumentEventListener::new(document, "click", callback);
//! drop(listener); // listener removed
//! ```
//!
//! Stored in a `Signal<Option<DocumentEventListener>>`, taking it out of the
//! signal and dropping it detaches it. During component teardown on desktop,
//! do that drop from a spawned task (see `hooks::use_outside_click`).

use wasm_bindgen_x::prelude::*;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DocumentEventListener {
    /// Attaches `callback` to the document for `event_name`.
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        if document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach document '{}' listener", event_name);
        }

        Self {
            document,
            event_name,
            callback,
        }
    }

    /// Attaches to the current window's document, if there is one.
    pub fn on_current_document(
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Option<Self> {
        let document = web_sys_x::window()?.document()?;
        Some(Self::new(document, event_name, callback))
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Whether an event's target lies inside `container` (the container itself included).
pub fn event_within(container: &web_sys_x::Element, event: &wasm_bindgen_x::JsValue) -> bool {
    let target = event
        .dyn_ref::<web_sys_x::Event>()
        .and_then(|e| e.target());
    let node = target
        .as_ref()
        .and_then(|t| t.dyn_ref::<web_sys_x::Node>());

    match node {
        Some(node) => container.contains(Some(node)),
        None => false,
    }
}

/// Scroll the element with `id` into view, as following a `#id` link would.
pub fn scroll_to_anchor(id: &str) {
    let Some(element) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        tracing::debug!("No element with id '{}' to scroll to", id);
        return;
    };
    element.scroll_into_view();
}
