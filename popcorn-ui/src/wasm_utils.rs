//! Browser interop for the widget
//!
//! # Scoped registrations
//!
//! Document listeners and the document title are tied to Rust ownership: the
//! registration happens in a constructor and is undone in `Drop`. Keep the
//! guard in a `Signal<Option<..>>` and set it to `None` to undo it.
//!
//! ```ignore
//! let listener = DocumentEventListener::new(document, "keydown", on_key);
//! drop(listener); // listener removed
//! ```

use wasm_bindgen_x::prelude::*;

/// Document title shown while no movie is open.
pub const APP_TITLE: &str = "usePopcorn";

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DocumentEventListener {
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
            tracing::warn!("Could not register document {} listener", event_name);
        }

        Self {
            document,
            event_name,
            callback,
        }
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

/// Overrides `document.title` until dropped, then puts the previous title back.
pub struct DocumentTitleGuard {
    document: web_sys_x::Document,
    previous: String,
}

impl DocumentTitleGuard {
    /// Returns `None` outside a browser.
    pub fn set(title: &str) -> Option<Self> {
        let document = web_sys_x::window()?.document()?;
        let previous = document.title();
        document.set_title(title);
        Some(Self { document, previous })
    }
}

impl Drop for DocumentTitleGuard {
    fn drop(&mut self) {
        self.document.set_title(&self.previous);
    }
}

pub fn document() -> Option<web_sys_x::Document> {
    web_sys_x::window()?.document()
}

/// `event.key` of a DOM keyboard event.
pub fn event_key(event: &wasm_bindgen_x::JsValue) -> Option<String> {
    js_sys_x::Reflect::get(event, &"key".into())
        .ok()
        .and_then(|key| key.as_string())
}

/// Focus the element with `id`, if it exists and can take focus.
pub fn focus_element(id: &str) {
    let Some(element) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    if let Ok(element) = element.dyn_into::<web_sys_x::HtmlElement>() {
        let _ = element.focus();
    }
}

/// Whether the element with `id` currently has focus.
pub fn is_element_focused(id: &str) -> bool {
    document()
        .and_then(|d| d.active_element())
        .is_some_and(|active| active.id() == id)
}
