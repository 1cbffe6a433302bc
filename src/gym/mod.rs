pub mod k_armed_bandit;

pub use k_armed_bandit::{KArmedBandit, TenArmedGaussian};
