pub mod implementations;
pub mod traits;

pub use implementations::{ConstantSource, RngSource, SequenceSource};
pub use traits::RandomSource;
