use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::BanditError,
    exploration::{EpsilonGreedy, Policy, UCB},
    gym::TenArmedGaussian,
    regret::expected_regret_series,
    sim::{run_simulation, Run},
    util::mean_series,
};

/// Configuration for comparing epsilon-greedy against UCB on the ten-armed testbed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestbedConfig {
    /// Pulls per run
    ///
    /// **Default**: `1000`
    pub num_trials: usize,
    /// Exploration probability of the epsilon-greedy policy
    ///
    /// **Default**: `0.5`
    pub epsilon: f64,
    /// Seed from which every bandit and policy seed in a comparison is derived
    ///
    /// **Default**: `0`
    pub seed: u64,
}

impl Default for TestbedConfig {
    fn default() -> Self {
        Self {
            num_trials: 1000,
            epsilon: 0.5,
            seed: 0,
        }
    }
}

/// Regret over time of one policy
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Name of the policy that produced the curve
    pub label: &'static str,
    /// Regret against the final sample means
    pub regret: Vec<f64>,
    /// Regret against the bandit's real arm means
    pub expected_regret: Vec<f64>,
}

impl Curve {
    fn from_run<const K: usize>(label: &'static str, run: Run<K>, true_means: &[f64]) -> Self {
        Self {
            label,
            expected_regret: expected_regret_series(true_means, &run.choices),
            regret: run.regret,
        }
    }

    /// Regret at the last timestep, or zero for an empty curve
    pub fn final_regret(&self) -> f64 {
        self.regret.last().copied().unwrap_or_default()
    }
}

/// Regret curves of both policies on the same bandit
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Constant-ε greedy policy
    pub epsilon_greedy: Curve,
    /// UCB1 policy
    pub ucb: Curve,
}

impl Comparison {
    /// Both curves, epsilon-greedy first
    pub fn curves(&self) -> [&Curve; 2] {
        [&self.epsilon_greedy, &self.ucb]
    }
}

/// Run both policies once
///
/// Each policy gets its own freshly built bandit. Both bandits come from the same
/// seed, so the policies face identical arms without sharing random state.
pub fn compare(config: &TestbedConfig) -> Result<Comparison, BanditError> {
    let mut seeds = StdRng::seed_from_u64(config.seed);
    let env_seed: u64 = seeds.gen();
    let policy_seed: u64 = seeds.gen();

    let epsilon_greedy = {
        let mut env = TenArmedGaussian::new(env_seed);
        let mut policy = EpsilonGreedy::constant(config.epsilon, policy_seed);
        curve(&mut env, &mut policy, config.num_trials)?
    };
    let ucb = {
        let mut env = TenArmedGaussian::new(env_seed);
        curve(&mut env, &mut UCB, config.num_trials)?
    };

    info!(
        "seed {}: final regret {} {:.3}, {} {:.3}",
        config.seed,
        epsilon_greedy.label,
        epsilon_greedy.final_regret(),
        ucb.label,
        ucb.final_regret()
    );
    Ok(Comparison {
        epsilon_greedy,
        ucb,
    })
}

/// Average [`compare`] over `num_runs` bandits seeded `seed, seed + 1, ...`
///
/// **Panics** if `num_runs` is zero
pub fn average(config: &TestbedConfig, num_runs: usize) -> Result<Comparison, BanditError> {
    assert!(num_runs > 0, "`num_runs` must be positive");

    let comparisons = (0..num_runs as u64)
        .map(|i| {
            compare(&TestbedConfig {
                seed: config.seed.wrapping_add(i),
                ..*config
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (eps, ucb): (Vec<_>, Vec<_>) = comparisons
        .into_iter()
        .map(|c| (c.epsilon_greedy, c.ucb))
        .unzip();
    let comparison = Comparison {
        epsilon_greedy: average_curves(eps),
        ucb: average_curves(ucb),
    };

    info!(
        "averaged {num_runs} runs: final regret {} {:.3}, {} {:.3}",
        comparison.epsilon_greedy.label,
        comparison.epsilon_greedy.final_regret(),
        comparison.ucb.label,
        comparison.ucb.final_regret()
    );
    Ok(comparison)
}

fn curve<P: Policy<10>>(
    env: &mut TenArmedGaussian,
    policy: &mut P,
    num_trials: usize,
) -> Result<Curve, BanditError> {
    let run: Run<10> = run_simulation(env, policy, num_trials)?;
    Ok(Curve::from_run(policy.name(), run, env.true_means()))
}

fn average_curves(curves: Vec<Curve>) -> Curve {
    let label = curves[0].label;
    let (regret, expected): (Vec<_>, Vec<_>) = curves
        .into_iter()
        .map(|c| (c.regret, c.expected_regret))
        .unzip();
    Curve {
        label,
        regret: mean_series(regret),
        expected_regret: mean_series(expected),
    }
}
