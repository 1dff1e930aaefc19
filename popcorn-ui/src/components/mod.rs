//! Shared UI components

pub mod collapsible_box;
pub mod helpers;
pub mod icons;
pub mod movie_detail;
pub mod movie_list;
pub mod nav_bar;
pub mod star_rating;
pub mod utils;
pub mod watched;

pub use collapsible_box::CollapsibleBox;
pub use helpers::{BackButton, ErrorMessage, Loader};
pub use icons::StarIcon;
pub use movie_detail::MovieDetailView;
pub use movie_list::MovieListView;
pub use nav_bar::{NavBarView, SEARCH_INPUT_ID};
pub use star_rating::StarRating;
pub use utils::{format_average, format_minutes, format_runtime};
pub use watched::{WatchedListView, WatchedSummaryView};
