//! Command implementations

pub mod score;
pub mod simple;

pub use score::score_guess;
pub use simple::{SessionSummary, run_simple};
