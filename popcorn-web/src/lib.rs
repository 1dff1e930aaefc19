pub mod widget;

use dioxus::prelude::*;
use popcorn_core::config::OmdbConfig;
use popcorn_ui::ErrorMessage;
use widget::PopcornWidget;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        OmdbConfig::from_build_env().map_err(|e| {
            tracing::error!("{}", e);
            e.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match config {
            Ok(config) => rsx! {
                PopcornWidget { config }
            },
            Err(message) => rsx! {
                main { class: "main",
                    ErrorMessage { message }
                }
            },
        }
    }
}
