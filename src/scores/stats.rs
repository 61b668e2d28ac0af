//! Score statistics
//!
//! Summaries computed from the recorded score sequence, used by the
//! statistics views.

use super::store::Score;
use crate::game::MAX_ATTEMPTS;

/// How many rounds were won at each attempt count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreDistribution {
    counts: [usize; MAX_ATTEMPTS as usize],
}

impl ScoreDistribution {
    #[must_use]
    pub fn from_scores(scores: &[Score]) -> Self {
        let mut counts = [0; MAX_ATTEMPTS as usize];
        for score in scores {
            counts[usize::from(score.value()) - 1] += 1;
        }
        Self { counts }
    }

    /// Number of wins recorded with the given attempt count (1..=6)
    #[must_use]
    pub fn count(&self, attempts: u8) -> usize {
        usize::from(attempts)
            .checked_sub(1)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate `(attempts, wins)` pairs for attempts 1 through 6
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        (1..=MAX_ATTEMPTS).zip(self.counts.iter().copied())
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Mean winning attempt count, `None` with no wins
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let sum: usize = self.iter().map(|(a, n)| usize::from(a) * n).sum();
        Some(sum as f64 / total as f64)
    }

    /// Most frequent winning attempt count (lowest on ties)
    #[must_use]
    pub fn mode(&self) -> Option<u8> {
        self.iter()
            .filter(|&(_, n)| n > 0)
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(a, _)| a)
    }

    /// Largest single bucket, for scaling bar charts
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[u8]) -> Vec<Score> {
        values.iter().map(|&v| Score::new(v).unwrap()).collect()
    }

    #[test]
    fn empty_distribution() {
        let dist = ScoreDistribution::from_scores(&[]);
        assert!(dist.is_empty());
        assert_eq!(dist.total(), 0);
        assert_eq!(dist.mean(), None);
        assert_eq!(dist.mode(), None);
        assert_eq!(dist.max_count(), 0);
    }

    #[test]
    fn counts_per_attempt() {
        let dist = ScoreDistribution::from_scores(&scores(&[3, 4, 3, 6, 1, 3]));
        assert_eq!(dist.count(1), 1);
        assert_eq!(dist.count(2), 0);
        assert_eq!(dist.count(3), 3);
        assert_eq!(dist.count(4), 1);
        assert_eq!(dist.count(6), 1);
        assert_eq!(dist.count(0), 0);
        assert_eq!(dist.count(7), 0);
        assert_eq!(dist.total(), 6);
        assert_eq!(dist.max_count(), 3);
    }

    #[test]
    fn iter_covers_all_attempts() {
        let dist = ScoreDistribution::from_scores(&scores(&[2, 2, 5]));
        let pairs: Vec<_> = dist.iter().collect();
        assert_eq!(pairs, vec![(1, 0), (2, 2), (3, 0), (4, 0), (5, 1), (6, 0)]);
    }

    #[test]
    fn mean_and_mode() {
        let dist = ScoreDistribution::from_scores(&scores(&[2, 4, 4, 6]));
        assert_eq!(dist.mean(), Some(4.0));
        assert_eq!(dist.mode(), Some(4));
    }

    #[test]
    fn mode_prefers_fewer_attempts_on_tie() {
        let dist = ScoreDistribution::from_scores(&scores(&[5, 3, 5, 3]));
        assert_eq!(dist.mode(), Some(3));
    }
}
