//! Back button component

use dioxus::prelude::*;

/// Round button in the corner of the detail panel
#[component]
pub fn BackButton(on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "btn-back",
            "data-testid": "back-button",
            onclick: move |_| on_click.call(()),
            "👈"
        }
    }
}
