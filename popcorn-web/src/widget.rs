//! The search-and-watchlist widget
//!
//! Owns the fetch controller and the watched list, mirrors both into UI
//! stores, and wires the views and keyboard shortcuts to them.

use dioxus::prelude::*;
use popcorn_core::config::OmdbConfig;
use popcorn_core::controller::QueryFetchController;
use popcorn_core::models::WatchedEntry;
use popcorn_core::omdb::OmdbClient;
use popcorn_core::watchlist::Watchlist;
use popcorn_ui::hooks::{use_document_keydown, use_document_title};
use popcorn_ui::storage::LocalStorage;
use popcorn_ui::stores::{
    DetailUiState, DetailUiStateStoreExt, SearchUiState, SearchUiStateStoreExt, WatchedUiState,
};
use popcorn_ui::wasm_utils::{focus_element, is_element_focused};
use popcorn_ui::{
    CollapsibleBox, MovieDetailView, MovieListView, NavBarView, WatchedListView,
    WatchedSummaryView, SEARCH_INPUT_ID,
};
use tracing::warn;

#[component]
pub fn PopcornWidget(config: OmdbConfig) -> Element {
    let controller = use_hook(|| QueryFetchController::new(OmdbClient::new(&config)));

    let mut search = use_store(SearchUiState::default);
    let mut detail = use_store(DetailUiState::default);
    let mut watched = use_store(WatchedUiState::default);
    let mut watchlist = use_signal(|| Watchlist::new(LocalStorage));

    // Mirror published fetch states into the stores
    use_hook({
        let controller = controller.clone();
        move || {
            let mut results_rx = controller.subscribe_results();
            spawn(async move {
                while results_rx.changed().await.is_ok() {
                    let state = results_rx.borrow_and_update().clone();
                    search.write().apply_fetch(state);
                }
            });

            let mut detail_rx = controller.subscribe_detail();
            spawn(async move {
                while detail_rx.changed().await.is_ok() {
                    let state = detail_rx.borrow_and_update().clone();
                    detail.write().apply_fetch(controller.selected_id(), state);
                }
            });
        }
    });

    use_effect(move || {
        let mut list = watchlist.write();
        list.restore();
        watched.set(WatchedUiState::from_watchlist(&list));
    });

    let set_query = use_callback({
        let controller = controller.clone();
        move |value: String| {
            search.query().set(value.clone());
            if let Some(cycle) = controller.set_query(&value) {
                spawn(async move {
                    cycle.await;
                });
            }
        }
    });

    let close_detail = use_callback({
        let controller = controller.clone();
        move |_: ()| controller.close_detail()
    });

    let select_movie = use_callback({
        let controller = controller.clone();
        move |id: String| {
            if controller.selected_id().as_deref() == Some(id.as_str()) {
                controller.close_detail();
                return;
            }
            let cycle = controller.fetch_detail(&id);
            spawn(async move {
                cycle.await;
            });
        }
    });

    let add_watched = use_callback(move |_: ()| {
        let current = detail.read().clone();
        let (Some(movie), Some(rating)) = (current.detail, current.user_rating) else {
            return;
        };
        let entry = match WatchedEntry::from_detail(&movie, rating) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Not adding {}: {}", movie.id, e);
                return;
            }
        };

        let mut list = watchlist.write();
        if let Err(e) = list.add(entry) {
            warn!("{}", e);
        }
        watched.set(WatchedUiState::from_watchlist(&list));
    });

    let remove_watched = use_callback(move |id: String| {
        let mut list = watchlist.write();
        if list.remove(&id).is_some() {
            watched.set(WatchedUiState::from_watchlist(&list));
        }
    });

    // Enter jumps to a cleared search box, Escape closes the panel
    let on_key = use_callback(move |key: String| match key.as_str() {
        "Enter" => {
            if is_element_focused(SEARCH_INPUT_ID) {
                return;
            }
            focus_element(SEARCH_INPUT_ID);
            set_query.call(String::new());
        }
        "Escape" => close_detail.call(()),
        _ => {}
    });
    use_document_keydown(on_key);

    let title = use_memo(move || {
        detail
            .detail()
            .read()
            .as_ref()
            .map(|movie| format!("Movie | {}", movie.title))
    });
    use_document_title(title);

    use_drop({
        let controller = controller.clone();
        move || controller.shutdown()
    });

    let query = search.query().read().clone();
    let result_count = search.results().read().len();
    let selected_id = detail.selected_id().read().clone();
    let watched_rating = selected_id
        .as_deref()
        .and_then(|id| watched.read().rating_for(id));

    rsx! {
        NavBarView {
            query,
            result_count,
            on_query_change: set_query,
        }
        main { class: "main",
            CollapsibleBox {
                MovieListView {
                    state: search,
                    selected_id: selected_id.clone(),
                    on_select: select_movie,
                }
            }
            CollapsibleBox {
                if selected_id.is_some() {
                    MovieDetailView {
                        state: detail,
                        watched_rating,
                        on_close: close_detail,
                        on_rate: move |rating: u8| detail.user_rating().set(Some(rating)),
                        on_add: add_watched,
                    }
                } else {
                    WatchedSummaryView { state: watched }
                    WatchedListView {
                        state: watched,
                        on_remove: remove_watched,
                    }
                }
            }
        }
    }
}
