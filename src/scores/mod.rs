//! Score recording and statistics

mod stats;
mod store;

pub use stats::ScoreDistribution;
pub use store::{FileScoreStore, MemoryScoreStore, Score, ScoreStore, parse_scores};
