pub mod stage;
pub mod trial;

pub use stage::Stage;
pub use trial::{BatchStatus, SimulationBatch, TrialResult};
