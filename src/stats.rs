use crate::util::argmax;

/// Pull counts and sample means for each of `K` arms
///
/// Created fresh for every simulation run and never shared between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ArmStats<const K: usize> {
    counts: [u64; K],
    means: [f64; K],
}

impl<const K: usize> Default for ArmStats<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const K: usize> ArmStats<K> {
    /// All counts and means start at zero
    pub fn new() -> Self {
        Self {
            counts: [0; K],
            means: [0.0; K],
        }
    }

    /// Record a reward for `arm` and update its running mean
    ///
    /// μ<sub>n</sub> = (1 - 1/n) μ<sub>n-1</sub> + (1/n) r
    ///
    /// **Panics** if `arm >= K`
    pub fn update(&mut self, arm: usize, reward: f64) {
        self.counts[arm] += 1;
        let n = self.counts[arm] as f64;
        self.means[arm] = (1.0 - 1.0 / n) * self.means[arm] + (1.0 / n) * reward;
    }

    /// Number of pulls of each arm
    pub fn counts(&self) -> &[u64; K] {
        &self.counts
    }

    /// Sample mean reward of each arm, zero for arms never pulled
    pub fn means(&self) -> &[f64; K] {
        &self.means
    }

    /// Total number of pulls across all arms
    pub fn total_pulls(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The arm with the highest sample mean, lowest index on ties
    pub fn best_arm(&self) -> usize {
        argmax(&self.means)
    }

    /// Sample mean of [`best_arm`](Self::best_arm)
    pub fn best_mean(&self) -> f64 {
        self.means[self.best_arm()]
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use statrs::statistics::Statistics;

    use super::*;

    #[test]
    fn incremental_mean_matches_direct_average() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut stats = ArmStats::<4>::new();
        let mut observed: [Vec<f64>; 4] = Default::default();

        for _ in 0..2000 {
            let arm = rng.gen_range(0..4);
            let reward = rng.gen_range(-10.0..10.0);
            stats.update(arm, reward);
            observed[arm].push(reward);
        }

        for arm in 0..4 {
            assert_eq!(
                stats.counts()[arm] as usize,
                observed[arm].len(),
                "Count tracks pulls"
            );
            let direct = observed[arm].iter().mean();
            assert!(
                (stats.means()[arm] - direct).abs() < 1e-9,
                "Arm {arm}: incremental {} vs direct {direct}",
                stats.means()[arm]
            );
        }
        assert_eq!(stats.total_pulls(), 2000);
    }

    #[test]
    fn first_pull_sets_mean_to_reward() {
        let mut stats = ArmStats::<2>::new();
        stats.update(1, -3.5);
        assert_eq!(stats.means(), &[0.0, -3.5]);
        assert_eq!(stats.counts(), &[0, 1]);
    }

    #[test]
    fn counts_are_wide_enough_for_long_runs() {
        let mut stats = ArmStats::<1> {
            counts: [u64::from(u32::MAX)],
            means: [2.0],
        };
        stats.update(0, 2.0);
        assert_eq!(stats.counts()[0], u64::from(u32::MAX) + 1, "No wrap past u32");
        assert_eq!(stats.means()[0], 2.0);
        assert_eq!(stats.total_pulls(), 1 << 32);
    }

    #[test]
    fn best_arm_breaks_ties_low() {
        let mut stats = ArmStats::<3>::new();
        assert_eq!(stats.best_arm(), 0, "Fresh stats tie at zero");

        stats.update(2, 1.0);
        stats.update(1, 1.0);
        assert_eq!(stats.best_arm(), 1, "Lowest index among equal means");
        assert_eq!(stats.best_mean(), 1.0);
    }
}
