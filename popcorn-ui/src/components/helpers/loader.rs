//! Loading indicator

use dioxus::prelude::*;

/// Loading text shown in place of a list or panel
#[component]
pub fn Loader(
    /// Text to display (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        p { class: "loader", "{message}" }
    }
}
