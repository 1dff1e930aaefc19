mod fetch_state;
mod stats;

pub use fetch_state::{CycleId, CycleTracker, FetchState};
pub use stats::mean;
