//! Greedy move selection: per-cell capture scoring and the parallel best-move search.

pub mod evaluate;
pub mod search;

pub use evaluate::evaluate;
pub use search::{Searcher, reduce_best, search_candidates};
