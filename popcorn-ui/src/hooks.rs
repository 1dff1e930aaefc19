//! Hooks around the scoped browser registrations in `wasm_utils`

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};

use crate::wasm_utils::{self, DocumentEventListener, DocumentTitleGuard};

/// Call `on_key` with `event.key` for every keydown on the document while the
/// calling component is mounted.
pub fn use_document_keydown(on_key: EventHandler<String>) {
    let mut listener = use_signal(|| None::<DocumentEventListener>);

    // use_effect so the window lookup happens after the first render
    use_effect(move || {
        let Some(document) = wasm_utils::document() else {
            return;
        };
        // The closure is invoked by the browser, outside the Dioxus runtime
        let runtime = Runtime::current();

        let keydown = DocumentEventListener::new(
            document,
            "keydown",
            move |event: wasm_bindgen_x::JsValue| {
                let _guard = RuntimeGuard::new(runtime.clone());
                if let Some(key) = wasm_utils::event_key(&event) {
                    on_key.call(key);
                }
            },
        );
        listener.set(Some(keydown));
    });

    use_drop(move || {
        listener.write().take();
    });
}

/// Keep `document.title` at the value of `title` while it is `Some`; the
/// previous title comes back once it turns `None` or the component unmounts.
pub fn use_document_title(title: Memo<Option<String>>) {
    let mut guard = use_signal(|| None::<DocumentTitleGuard>);

    use_effect(move || {
        let next = title();
        // Restore first so the saved title is never one of ours
        guard.set(None);
        if let Some(next) = next {
            guard.set(DocumentTitleGuard::set(&next));
        }
    });

    use_drop(move || {
        guard.write().take();
    });
}
