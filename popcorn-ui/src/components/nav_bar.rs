//! Top bar with the search box

use dioxus::prelude::*;

/// Element id of the search input, used by the Enter shortcut
pub const SEARCH_INPUT_ID: &str = "search-input";

#[component]
pub fn NavBarView(
    query: String,
    result_count: usize,
    on_query_change: EventHandler<String>,
) -> Element {
    rsx! {
        nav { class: "nav-bar",
            div { class: "logo",
                span { role: "img", "🍿" }
                h1 { "usePopcorn" }
            }
            input {
                id: SEARCH_INPUT_ID,
                class: "search",
                r#type: "text",
                placeholder: "Search movies...",
                value: "{query}",
                oninput: move |e: FormEvent| on_query_change.call(e.value()),
            }
            p { class: "num-results",
                "Found "
                strong { "{result_count}" }
                " results"
            }
        }
    }
}
