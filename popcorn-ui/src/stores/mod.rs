//! Store types for UI state
//!
//! popcorn-web mirrors the fetch controller and the watched list into these;
//! views read them through lenses.

pub mod detail;
pub mod search;
pub mod watched;

pub use detail::*;
pub use search::*;
pub use watched::*;
