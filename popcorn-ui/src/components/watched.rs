//! Watched summary and list
//!
//! Both read `WatchedUiState`; the summary only re-renders when the stats,
//! count or warning change.

use super::helpers::ErrorMessage;
use super::utils::{format_average, format_minutes, poster_src};
use crate::stores::watched::{WatchedUiState, WatchedUiStateStoreExt};
use dioxus::prelude::*;
use popcorn_core::models::WatchedEntry;

#[component]
pub fn WatchedSummaryView(state: ReadStore<WatchedUiState>) -> Element {
    let count = state.entries().read().len();
    let stats = *state.stats().read();
    let avg_imdb = format_average(stats.avg_imdb_rating);
    let avg_user = format_average(stats.avg_user_rating);
    let avg_runtime = format_minutes(stats.avg_runtime);
    let warning = state.warning().read().clone();

    rsx! {
        div { class: "summary",
            h2 { "Movies you watched" }
            div {
                p {
                    span { "#️⃣" }
                    span { "{count} movies" }
                }
                p {
                    span { "⭐️" }
                    span { "{avg_imdb}" }
                }
                p {
                    span { "🌟" }
                    span { "{avg_user}" }
                }
                p {
                    span { "⏳" }
                    span { "{avg_runtime}" }
                }
            }
            if let Some(message) = warning {
                ErrorMessage { message }
            }
        }
    }
}

#[component]
pub fn WatchedListView(state: ReadStore<WatchedUiState>, on_remove: EventHandler<String>) -> Element {
    let entries = state.entries().read().clone();

    rsx! {
        ul { class: "list",
            for entry in entries {
                WatchedRow { key: "{entry.id}", entry, on_remove }
            }
        }
    }
}

#[component]
fn WatchedRow(entry: WatchedEntry, on_remove: EventHandler<String>) -> Element {
    let id = entry.id.clone();

    rsx! {
        li {
            if let Some(src) = poster_src(&entry.poster_url) {
                img { src: "{src}", alt: "{entry.title} poster" }
            } else {
                div { class: "poster-missing" }
            }
            h3 { "{entry.title}" }
            div {
                p {
                    span { "⭐️" }
                    span { "{entry.imdb_rating}" }
                }
                p {
                    span { "🌟" }
                    span { "{entry.user_rating}" }
                }
                p {
                    span { "⏳" }
                    span { "{entry.runtime_minutes} min" }
                }
                button {
                    class: "btn-delete",
                    title: "Remove from list",
                    onclick: move |_| on_remove.call(id.clone()),
                    "X"
                }
            }
        }
    }
}
