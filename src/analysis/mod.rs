pub mod clock;
pub mod histogram;
pub mod statistics;

pub use clock::{CompletionClock, START_OF_DAY};
pub use histogram::{histogram, HistogramBin, DEFAULT_BINS};
pub use statistics::{bottleneck, mean, StageMean, StageSummary};
