//! Power-draw sampling: pluggable sources, pacing strategies and the tracker
//! that turns them into a [`PowerSeries`].

pub mod pacing;
pub mod series;
pub mod source;
pub mod tracker;

pub use pacing::{FixedDelay, NoDelay, Pacer};
pub use series::{CarbonSeries, PowerSample, PowerSeries};
pub use source::{PowerSource, UniformPowerSource};
pub use tracker::PowerTracker;
