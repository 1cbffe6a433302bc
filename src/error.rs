use thiserror::Error;

/// Errors that abort a simulation run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BanditError {
    #[error("invalid arm {arm}, the bandit has {num_arms} arms")]
    InvalidArm { arm: usize, num_arms: usize },
    #[error("arm {0} has never been pulled, its confidence bound is undefined")]
    UnpulledArm(usize),
}
