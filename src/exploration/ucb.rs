use crate::{env::Environment, error::BanditError, stats::ArmStats, util::argmax};

use super::Policy;

/// Upper confidence bound policy (UCB1, Auer, Cesa-Bianchi & Fischer 2002)
///
/// Pulls every arm once, in index order, during the first `K` steps. After
/// that it pulls the arm maximising
///
/// μ<sub>a</sub> + √(2 ln t / n<sub>a</sub>)
///
/// where n<sub>a</sub> is the pull count of arm `a`. Ties go to the lowest
/// index. Expected regret grows logarithmically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UCB;

impl UCB {
    pub fn new() -> Self {
        Self
    }

    /// Upper confidence bound of every arm at timestep `t`
    ///
    /// **Errors** if any arm has never been pulled
    pub fn bounds<const K: usize>(
        t: usize,
        stats: &ArmStats<K>,
    ) -> Result<[f64; K], BanditError> {
        if let Some(arm) = stats.counts().iter().position(|&n| n == 0) {
            return Err(BanditError::UnpulledArm(arm));
        }
        let ln_t = (t as f64).ln();
        let means = stats.means();
        let counts = stats.counts();
        Ok(std::array::from_fn(|a| {
            means[a] + (2.0 * ln_t / counts[a] as f64).sqrt()
        }))
    }
}

impl<const K: usize> Policy<K> for UCB {
    fn name(&self) -> &'static str {
        "upper confidence bounds"
    }

    fn choose<E>(
        &mut self,
        t: usize,
        stats: &ArmStats<K>,
        _env: &mut E,
    ) -> Result<usize, BanditError>
    where
        E: Environment<Action = usize>,
    {
        if t < K {
            return Ok(t);
        }
        Ok(argmax(&Self::bounds(t, stats)?))
    }
}
