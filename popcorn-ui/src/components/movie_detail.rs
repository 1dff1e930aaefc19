//! Detail panel for the selected movie

use super::helpers::{BackButton, ErrorMessage, Loader};
use super::star_rating::StarRating;
use super::utils::{format_imdb_rating, format_runtime, poster_src};
use crate::stores::detail::{DetailUiState, DetailUiStateStoreExt};
use dioxus::prelude::*;

/// Detail panel view
///
/// Shows the star rating and "+ Add to list" for new movies, or the stored
/// rating when the movie is already on the watched list.
#[component]
pub fn MovieDetailView(
    state: ReadStore<DetailUiState>,
    /// The user's rating if this movie is already watched
    watched_rating: Option<u8>,
    on_close: EventHandler<()>,
    on_rate: EventHandler<u8>,
    on_add: EventHandler<()>,
) -> Element {
    if *state.loading().read() {
        return rsx! {
            div { class: "details", Loader {} }
        };
    }
    if let Some(message) = state.error().read().clone() {
        return rsx! {
            div { class: "details",
                BackButton { on_click: on_close }
                ErrorMessage { message }
            }
        };
    }
    let Some(movie) = state.detail().read().clone() else {
        return rsx! {};
    };
    let user_rating = *state.user_rating().read();
    let runtime = format_runtime(movie.runtime_minutes);
    let imdb_rating = format_imdb_rating(movie.imdb_rating);

    rsx! {
        div { class: "details", "data-testid": "movie-detail",
            header {
                BackButton { on_click: on_close }
                if let Some(src) = poster_src(&movie.poster_url) {
                    img { src: "{src}", alt: "Poster of {movie.title} movie" }
                }
                div { class: "details-overview",
                    h2 { "{movie.title}" }
                    p { "{movie.release_date} • {runtime}" }
                    p { "{movie.genre}" }
                    p {
                        span { "⭐" }
                        "{imdb_rating} IMDb rating"
                    }
                }
            }
            section {
                div { class: "rating",
                    if let Some(rated) = watched_rating {
                        p { "You rated this movie {rated} ⭐" }
                    } else {
                        StarRating { rating: user_rating, on_rate }
                        if user_rating.is_some() {
                            button {
                                class: "btn-add",
                                onclick: move |_| on_add.call(()),
                                "+ Add to list"
                            }
                        }
                    }
                }
                p {
                    em { "{movie.plot}" }
                }
                p { "Starring {movie.actors}" }
                p { "Directed by {movie.director}" }
            }
        }
    }
}
