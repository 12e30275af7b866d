//! Section content preparation: cleanup, statistics and search.

mod clean;
mod search;
mod stats;

pub use clean::{EMPTY_PLACEHOLDER, TRUNCATION_MARKER, clean, filter_for_terminal};
pub use search::{SearchHit, search};
pub use stats::{Stats, stats};
