use bandit_regret::{
    env::{Environment, Step},
    exploration::{EpsilonGreedy, UCB},
    gym::TenArmedGaussian,
    regret::{expected_regret_series, regret_series},
    sim::{run_simulation, Run, SimulationConfig},
    BanditError,
};

/// Arm 0 always pays 1.0, every other arm pays 0.0
struct FirstArmPays;

impl Environment for FirstArmPays {
    type State = ();
    type Action = usize;

    fn step(&mut self, action: usize) -> Result<Step<()>, BanditError> {
        match action {
            0 => Ok(Step {
                observation: None,
                reward: 1.0,
                done: true,
            }),
            1..=9 => Ok(Step {
                observation: None,
                reward: 0.0,
                done: true,
            }),
            arm => Err(BanditError::InvalidArm { arm, num_arms: 10 }),
        }
    }

    fn reset(&mut self) {}

    fn random_action(&mut self) -> usize {
        9
    }
}

#[test]
fn pure_greedy_locks_onto_paying_arm() {
    let mut policy = EpsilonGreedy::constant(0.0, 0);
    let run: Run<10> = run_simulation(&mut FirstArmPays, &mut policy, 10).unwrap();

    assert_eq!(run.choices, vec![0; 10], "Tie at zero resolves to arm 0");
    assert_eq!(run.regret, vec![0.0; 10], "Best possible policy has no regret");
}

#[test]
fn pure_exploration_uses_the_sampler() {
    let mut policy = EpsilonGreedy::constant(1.0, 0);
    let run: Run<10> = run_simulation(&mut FirstArmPays, &mut policy, 10).unwrap();

    assert_eq!(run.choices, vec![9; 10], "Every pick is a random action");
    assert_eq!(run.stats.means()[9], 0.0);
    assert_eq!(run.stats.counts()[0], 0);
}

#[test]
fn ucb_on_deterministic_bandit() {
    let run: Run<10> = run_simulation(&mut FirstArmPays, &mut UCB, 100).unwrap();

    assert_eq!(run.choices[..10], [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let counts = run.stats.counts();
    assert!(counts[0] > 40, "Paying arm dominates after warm-up");
    assert!(counts[1..].iter().all(|&n| n < counts[0]));
    assert_eq!(run.regret, regret_series(run.stats.means(), &run.choices));
}

#[test]
fn regret_on_gaussian_bandit() {
    let config = SimulationConfig::default();
    let mut env = TenArmedGaussian::new(2024);
    let run: Run<10> = config.run(&mut env, &mut UCB).unwrap();

    assert_eq!(run.regret.len(), config.num_trials);
    assert_eq!(run.regret[0], 0.0);

    let expected = expected_regret_series(env.true_means(), &run.choices);
    assert!(
        expected.windows(2).all(|w| w[1] >= w[0]),
        "Regret against real means never decreases"
    );

    let means = env.true_means();
    let uniform = config.num_trials as f64
        * (means[env.optimal_arm()] - means.iter().sum::<f64>() / 10.0);
    let incurred = expected[expected.len() - 1];
    assert!(
        incurred < 0.5 * uniform,
        "UCB regret {incurred} well below uniform play {uniform}"
    );
}
