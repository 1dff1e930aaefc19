//! Detail panel state

use dioxus::prelude::*;
use popcorn_core::controller::DetailState;
use popcorn_core::models::MovieDetail;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct DetailUiState {
    /// Movie whose panel is open, `None` when closed
    pub selected_id: Option<String>,
    pub detail: Option<MovieDetail>,
    pub loading: bool,
    pub error: Option<String>,
    /// Stars picked in the panel, not yet added to the list
    pub user_rating: Option<u8>,
}

impl DetailUiState {
    /// Copy a published fetch state for `selected_id`. Switching movies drops
    /// the pending star rating.
    pub fn apply_fetch(&mut self, selected_id: Option<String>, state: DetailState) {
        if self.selected_id != selected_id {
            self.user_rating = None;
        }
        self.selected_id = selected_id;
        self.detail = state.data;
        self.loading = state.is_loading;
        self.error = state.error;
    }

    pub fn is_open(&self) -> bool {
        self.selected_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_movie_clears_rating() {
        let mut ui = DetailUiState::default();
        ui.apply_fetch(Some("tt1".to_string()), DetailState::loading());
        ui.user_rating = Some(7);

        ui.apply_fetch(Some("tt1".to_string()), DetailState::failed("Details not Found"));
        assert_eq!(ui.user_rating, Some(7));
        assert_eq!(ui.error.as_deref(), Some("Details not Found"));

        ui.apply_fetch(Some("tt2".to_string()), DetailState::loading());
        assert_eq!(ui.user_rating, None);
        assert!(ui.loading);
    }

    #[test]
    fn test_closed_panel() {
        let mut ui = DetailUiState::default();
        ui.apply_fetch(Some("tt1".to_string()), DetailState::loading());
        assert!(ui.is_open());
        ui.apply_fetch(None, DetailState::idle());
        assert!(!ui.is_open());
        assert_eq!(ui.detail, None);
    }
}
