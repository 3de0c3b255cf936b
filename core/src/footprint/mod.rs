pub mod calculator;
pub mod reduction;

pub use calculator::EmissionCalculator;
pub use reduction::{ReductionStrategy, DEFAULT_REDUCTION_RATIO};
