//! Search results list
//!
//! Reads `SearchUiState` through lenses: the loading flag and the error take
//! over the whole box, otherwise the rows are rendered in result order.

use super::helpers::{ErrorMessage, Loader};
use super::utils::poster_src;
use crate::stores::search::{SearchUiState, SearchUiStateStoreExt};
use dioxus::prelude::*;
use popcorn_core::models::SearchResult;

#[component]
pub fn MovieListView(
    state: ReadStore<SearchUiState>,
    /// Highlighted row, if its detail panel is open
    selected_id: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    if *state.loading().read() {
        return rsx! {
            Loader {}
        };
    }
    if let Some(message) = state.error().read().clone() {
        return rsx! {
            ErrorMessage { message }
        };
    }

    let results = state.results().read().clone();

    rsx! {
        ul { class: "list list-movies",
            for movie in results {
                MovieRow {
                    key: "{movie.id}",
                    selected: selected_id.as_deref() == Some(movie.id.as_str()),
                    movie,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn MovieRow(movie: SearchResult, selected: bool, on_select: EventHandler<String>) -> Element {
    let id = movie.id.clone();
    let class = if selected { "selected" } else { "" };

    rsx! {
        li { class: "{class}", onclick: move |_| on_select.call(id.clone()),
            if let Some(src) = poster_src(&movie.poster_url) {
                img { src: "{src}", alt: "{movie.title} poster" }
            } else {
                div { class: "poster-missing" }
            }
            h3 { "{movie.title}" }
            div {
                p {
                    span { "🗓" }
                    span { "{movie.year}" }
                }
            }
        }
    }
}
