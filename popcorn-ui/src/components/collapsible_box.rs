//! Panel with a show/hide toggle

use dioxus::prelude::*;

#[component]
pub fn CollapsibleBox(children: Element) -> Element {
    let mut is_open = use_signal(|| true);

    rsx! {
        div { class: "box",
            button {
                class: "btn-toggle",
                onclick: move |_| is_open.toggle(),
                if is_open() {
                    "–"
                } else {
                    "+"
                }
            }
            if is_open() {
                {children}
            }
        }
    }
}
