//! Hooks wrapping browser-side lifecycles

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};

use crate::wasm_utils::{event_within, DocumentEventListener};

/// Calls `on_outside` for every document click whose target is not inside `container`.
///
/// The listener is attached once, after mount (calling into `web_sys_x` during
/// render is not safe on desktop), and removed when the owning component unmounts.
/// Clicks before `container` has mounted are ignored.
pub fn use_outside_click(
    container: Signal<Option<Rc<MountedData>>>,
    on_outside: Callback<()>,
) {
    let mut listener: Signal<Option<DocumentEventListener>> = use_signal(|| None);

    use_effect(move || {
        if listener.peek().is_some() {
            return;
        }

        // The click callback runs from wasm-bindgen outside the Dioxus runtime,
        // so capture it here and restore it for each event.
        let runtime = Runtime::current();

        let handle = DocumentEventListener::on_current_document("click", move |event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            // Signals may already be dropped if the component unmounted
            // before the deferred listener cleanup ran.
            let Ok(mounted) = container.try_peek().map(|m| (*m).clone()) else {
                return;
            };
            let Some(mounted) = mounted else {
                return;
            };
            let Some(element) = mounted.downcast::<web_sys_x::Element>() else {
                return;
            };
            if !event_within(element, &event) {
                on_outside.call(());
            }
        });

        listener.set(handle);
    });

    use_drop(move || {
        // WORKAROUND: Dropping the listener removes it from the document, which is
        // synchronous wry-bindgen IPC. Doing that inside scope teardown panics on
        // desktop (U8BufferEmpty), so move it out and drop it from a spawned task.
        let Ok(mut guard) = listener.try_write() else {
            return;
        };
        if let Some(handle) = guard.take() {
            spawn(async move {
                drop(handle);
            });
        }
    });
}

/// Runs `on_elapsed` after `ms` milliseconds unless restarted or cancelled first.
///
/// Returned as a pair of `(start, cancel)` callbacks sharing one pending task.
pub fn use_delayed_action(ms: u64, on_elapsed: Callback<()>) -> (Callback<()>, Callback<()>) {
    let mut pending = use_signal(|| None::<Task>);

    let cancel = use_callback(move |()| {
        if let Some(task) = pending.take() {
            task.cancel();
        }
    });

    let start = use_callback(move |()| {
        cancel.call(());
        let task = spawn(async move {
            sleep_ms(ms).await;
            pending.set(None);
            on_elapsed.call(());
        });
        pending.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = pending.peek().as_ref() {
            task.cancel();
        }
    });

    (start, cancel)
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
