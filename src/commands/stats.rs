//! Score statistics commands

use crate::error::GameError;
use crate::scores::{ScoreDistribution, ScoreStore};
use tracing::info;

/// Load recorded scores and summarize them
///
/// # Errors
///
/// Returns the store's read error.
pub fn load_distribution(store: &impl ScoreStore) -> Result<ScoreDistribution, GameError> {
    let scores = store.load_scores()?;
    info!(count = scores.len(), "Loaded scores");
    Ok(ScoreDistribution::from_scores(&scores))
}

/// Erase all recorded scores, returning how many were removed
///
/// # Errors
///
/// Returns the store's read or write error.
pub fn clear_scores(store: &mut impl ScoreStore) -> Result<usize, GameError> {
    let removed = store.load_scores()?.len();
    store.clear_scores()?;
    Ok(removed)
}
