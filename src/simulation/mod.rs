pub mod cancel;
pub mod config;
pub mod engine;

pub use cancel::CancellationToken;
pub use config::{ConfigBounds, SimulationConfig, StageTimings};
pub use engine::{run_simulation, run_trial, Simulation};
