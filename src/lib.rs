//! Monte Carlo estimate of how long it takes to hand out meal trays.
//!
//! Three staffed stages run side by side (side-dish serving, transport, and
//! rice serving); each trial samples all three and takes the slowest.
//!
//! ```
//! use ompreng_sim::analysis::StageSummary;
//! use ompreng_sim::random::RngSource;
//! use ompreng_sim::simulation::{run_simulation, SimulationConfig};
//!
//! let config = SimulationConfig::new(60, 3, 2, 2, 3, 200).unwrap();
//! let batch = run_simulation(&config, &mut RngSource::seeded(42)).unwrap();
//! let summary = StageSummary::from_batch(&batch).unwrap();
//! println!("done at {} ({})", summary.completion_clock(), summary.bottleneck);
//! ```

pub mod analysis;
pub mod error;
pub mod model;
pub mod random;
pub mod simulation;

pub use error::{RandomSourceError, Result, SimulationError};
