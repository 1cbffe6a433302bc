/// Timestep-indexed hyperparameter schedules
pub mod decay;

/// Bandit environment abstraction
pub mod env;

/// Error types
pub mod error;

/// Action-selection policies
pub mod exploration;

/// Concrete testing environments
pub mod gym;

/// Regret calculation
pub mod regret;

/// The simulation loop
pub mod sim;

/// Running per-arm statistics
pub mod stats;

/// Side-by-side comparison of the policies
pub mod testbed;

mod util;

pub use error::BanditError;
