/// A value indexed by timestep, such as the exploration probability of an epsilon-greedy policy
pub trait Decay {
    /// Value at timestep `t`
    fn evaluate(&self, t: f64) -> f64;
}

/// A value that never changes
///
/// The default epsilon-greedy schedule is `Constant::new(0.5)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: f64) -> f64 {
        self.value
    }
}
