//! popcorn-ui - View components and UI state for the popcorn widget
//!
//! Components are pure rendering over props and stores; fetching, storage and
//! keyboard wiring happen in popcorn-web.

pub mod components;
pub mod hooks;
pub mod storage;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
