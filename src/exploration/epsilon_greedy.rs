use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    assert_interval,
    decay::{Constant, Decay},
    env::Environment,
    error::BanditError,
    stats::ArmStats,
};

use super::{Choice, Policy};

/// Epsilon greedy policy with a time-indexed epsilon schedule
///
/// With probability ε the policy explores by pulling a uniformly random arm;
/// otherwise it exploits the arm with the highest sample mean (lowest index on
/// ties). With a constant ε the policy never stops exploring, so its expected
/// regret grows linearly.
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<D: Decay = Constant> {
    epsilon: D,
    rng: StdRng,
}

impl EpsilonGreedy<Constant> {
    /// Constant exploration probability
    ///
    /// **Panics** if `epsilon` is not in the interval `[0,1]`
    pub fn constant(epsilon: f64, seed: u64) -> Self {
        assert_interval!(epsilon, 0.0, 1.0);
        Self::new(Constant::new(epsilon), seed)
    }
}

impl Default for EpsilonGreedy<Constant> {
    /// ε = 0.5, seeded from the OS
    fn default() -> Self {
        Self {
            epsilon: Constant::new(0.5),
            rng: StdRng::from_entropy(),
        }
    }
}

impl<D: Decay> EpsilonGreedy<D> {
    /// Initialize epsilon greedy policy with a decay strategy
    pub fn new(decay: D, seed: u64) -> Self {
        Self {
            epsilon: decay,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Exploration probability at timestep `t`
    pub fn epsilon(&self, t: usize) -> f64 {
        self.epsilon.evaluate(t as f64)
    }

    /// Roll for exploration at timestep `t`
    pub fn roll(&mut self, t: usize) -> Choice {
        if self.rng.gen::<f64>() < self.epsilon(t) {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}

impl<const K: usize, D: Decay> Policy<K> for EpsilonGreedy<D> {
    fn name(&self) -> &'static str {
        "epsilon-greedy"
    }

    fn choose<E>(
        &mut self,
        t: usize,
        stats: &ArmStats<K>,
        env: &mut E,
    ) -> Result<usize, BanditError>
    where
        E: Environment<Action = usize>,
    {
        Ok(match self.roll(t) {
            Choice::Explore => env.random_action(),
            Choice::Exploit => stats.best_arm(),
        })
    }
}
