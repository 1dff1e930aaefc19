pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod models;
pub mod omdb;
pub mod storage;
pub mod watchlist;

pub use popcorn_common::FetchState;
