use crate::error::BanditError;

/// Outcome of a single pull
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    /// Observation after the pull, if the environment produces one
    pub observation: Option<S>,
    /// Reward drawn for the pulled arm
    pub reward: f64,
    /// Whether the environment has reached a terminal state
    pub done: bool,
}

/// An environment an agent can act in
///
/// A bandit is the degenerate case: one state, a fixed set of arms, and a
/// stochastic reward per arm. Every pull advances the environment's internal
/// random number generator.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Apply an action, producing an observation and a reward
    ///
    /// **Errors** if the action is not valid for this environment
    fn step(&mut self, action: Self::Action) -> Result<Step<Self::State>, BanditError>;

    /// Reset the environment to an initial state
    ///
    /// **Returns** the state
    fn reset(&mut self) -> Self::State;

    /// Sample an action uniformly at random
    fn random_action(&mut self) -> Self::Action;
}
