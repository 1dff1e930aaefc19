//! Inline error message

use dioxus::prelude::*;

#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        p { class: "error", "❌{message}❌" }
    }
}
