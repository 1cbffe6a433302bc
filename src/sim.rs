use log::{debug, trace};

use crate::{
    env::Environment, error::BanditError, exploration::Policy, regret::regret_series,
    stats::ArmStats,
};

/// Configuration for a single simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of pulls in the run
    ///
    /// **Default**: `1000`
    pub num_trials: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { num_trials: 1000 }
    }
}

impl SimulationConfig {
    /// Run `policy` in `env` for the configured number of trials
    pub fn run<const K: usize, E, P>(
        &self,
        env: &mut E,
        policy: &mut P,
    ) -> Result<Run<K>, BanditError>
    where
        E: Environment<Action = usize>,
        P: Policy<K>,
    {
        run_simulation(env, policy, self.num_trials)
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct Run<const K: usize> {
    /// Final pull counts and sample means
    pub stats: ArmStats<K>,
    /// Arm pulled at each timestep
    pub choices: Vec<usize>,
    /// Regret at each timestep, see [`regret_series`]
    pub regret: Vec<f64>,
}

/// Drive `env` with `policy` for `num_trials` pulls
///
/// Statistics and the choice history are created fresh for the run. The first
/// error from the policy or the environment aborts the run and is returned as is.
pub fn run_simulation<const K: usize, E, P>(
    env: &mut E,
    policy: &mut P,
    num_trials: usize,
) -> Result<Run<K>, BanditError>
where
    E: Environment<Action = usize>,
    P: Policy<K>,
{
    debug!(
        "{}: starting {num_trials} trials on {} arms",
        policy.name(),
        K
    );
    env.reset();

    let mut stats = ArmStats::<K>::new();
    let mut choices = Vec::with_capacity(num_trials);

    for t in 0..num_trials {
        let arm = policy.choose(t, &stats, env)?;
        let step = env.step(arm)?;
        trace!("t={t} arm={arm} reward={:.4}", step.reward);

        stats.update(arm, step.reward);
        choices.push(arm);
    }

    let regret = regret_series(stats.means(), &choices);
    debug!(
        "{}: best arm {} (mean {:.4}), final regret {:.4}",
        policy.name(),
        stats.best_arm(),
        stats.best_mean(),
        regret.last().copied().unwrap_or_default()
    );

    Ok(Run {
        stats,
        choices,
        regret,
    })
}
