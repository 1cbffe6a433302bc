use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::{
    env::{Environment, Step},
    error::BanditError,
    util::argmax,
};

/// K-armed Gaussian bandit
///
/// Each arm pays a reward drawn from N(μ<sub>a</sub>, 1). The means μ<sub>a</sub> are
/// themselves drawn once from N(0, 1) when the bandit is created and stay fixed for
/// its lifetime. The goal is to learn which arm has the highest mean reward.
///
/// The bandit owns its random number generator, so two bandits built from the same
/// seed produce identical arms and identical reward sequences.
#[derive(Debug, Clone)]
pub struct KArmedBandit<const K: usize> {
    means: [f64; K],
    rng: StdRng,
}

/// The classic ten-armed testbed
pub type TenArmedGaussian = KArmedBandit<10>;

impl<const K: usize> KArmedBandit<K> {
    /// Initialize a bandit with arm means drawn from N(0, 1)
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let means: [f64; K] = std::array::from_fn(|_| rng.sample(StandardNormal));
        Self { means, rng }
    }

    /// Initialize a bandit with known arm means
    pub fn with_means(means: [f64; K], seed: u64) -> Self {
        Self {
            means,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The real mean reward of each arm
    pub fn true_means(&self) -> &[f64; K] {
        &self.means
    }

    /// The arm with the highest real mean
    pub fn optimal_arm(&self) -> usize {
        argmax(&self.means)
    }
}

impl<const K: usize> Environment for KArmedBandit<K> {
    type State = ();
    type Action = usize;

    fn step(&mut self, action: Self::Action) -> Result<Step<Self::State>, BanditError> {
        let mean = self.means.get(action).ok_or(BanditError::InvalidArm {
            arm: action,
            num_arms: K,
        })?;
        let noise: f64 = self.rng.sample(StandardNormal);
        Ok(Step {
            observation: Some(()),
            reward: mean + noise,
            done: true,
        })
    }

    fn reset(&mut self) -> Self::State {}

    fn random_action(&mut self) -> Self::Action {
        self.rng.gen_range(0..K)
    }
}
