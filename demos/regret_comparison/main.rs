use std::error::Error;

use bandit_regret::testbed::{self, TestbedConfig};
use log::info;

const CHECKPOINTS: [usize; 6] = [0, 10, 100, 250, 500, 999];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TestbedConfig::default();
    let comparison = testbed::compare(&config)?;

    info!("Gaussian 10-armed bandit regret vs time");
    for curve in comparison.curves() {
        let points = CHECKPOINTS
            .iter()
            .filter_map(|&t| curve.regret.get(t).map(|r| format!("t={t}: {r:.2}")))
            .collect::<Vec<_>>()
            .join(", ");
        info!("{:<24} {}", curve.label, points);
    }

    Ok(())
}
