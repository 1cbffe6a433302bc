//! Cumulative regret of a choice history.
//!
//! Entry `t` of a regret series is `μ* · t - Σ_{i<t} μ[choice[i]]`, the gap
//! between always pulling the best arm and the arms actually pulled before
//! step `t`. Entry 0 is always zero.

use crate::util::argmax;

/// Regret series measured against the *final* sample means
///
/// The final means are applied retroactively to every timestep, not the means
/// known when each decision was made, and the best arm is the one with the highest
/// final sample mean. This approximates true regret; the series may decrease
/// locally and is not guaranteed to be monotone.
///
/// **Panics** if a choice is not a valid index into `means`
pub fn regret_series(means: &[f64], choices: &[usize]) -> Vec<f64> {
    cumulative_gap(means, choices)
}

/// Regret series measured against the environment's real arm means
///
/// Only available when the environment exposes them, as
/// [`KArmedBandit::true_means`](crate::gym::KArmedBandit::true_means) does.
/// Because every term is a non-negative gap, this series is non-decreasing.
///
/// **Panics** if a choice is not a valid index into `true_means`
pub fn expected_regret_series(true_means: &[f64], choices: &[usize]) -> Vec<f64> {
    cumulative_gap(true_means, choices)
}

fn cumulative_gap(means: &[f64], choices: &[usize]) -> Vec<f64> {
    if choices.is_empty() {
        return Vec::new();
    }
    let best = means[argmax(means)];
    // Σ (best - μ[arm]) == best·t - Σ μ[arm], and never decreases when every gap is non-negative
    let mut regret = 0.0;
    let mut series = Vec::with_capacity(choices.len());
    for &arm in choices {
        series.push(regret);
        regret += best - means[arm];
    }
    series
}
