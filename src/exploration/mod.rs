mod epsilon_greedy;
mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use ucb::UCB;

use crate::{env::Environment, error::BanditError, stats::ArmStats};

/// Exploration roll result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Explore,
    Exploit,
}

/// An action-selection policy over `K` arms
pub trait Policy<const K: usize> {
    /// Human readable name, used in logs and comparison labels
    fn name(&self) -> &'static str;

    /// Pick the arm to pull at timestep `t`
    ///
    /// `env` is available for its uniform action sampler; policies must not step it.
    fn choose<E>(
        &mut self,
        t: usize,
        stats: &ArmStats<K>,
        env: &mut E,
    ) -> Result<usize, BanditError>
    where
        E: Environment<Action = usize>;
}
