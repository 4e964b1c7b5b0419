pub mod config;
pub mod error;

pub use config::SimulationConfig;
pub use error::{LifeError, Result};

/// Generation counter (simulation time unit)
pub type Generation = u64;
