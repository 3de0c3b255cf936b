//! Core components of the device carbon tracker.
//!
//! Emission formulas, the pluggable power-sampling pipeline, per-device
//! reports, chart models and the remote estimation client all live here; the
//! binaries only wire them together.

pub mod charts;
pub mod datasets;
pub mod footprint;
pub mod math;
pub mod prelude;
pub mod remote;
pub mod report;
pub mod telemetry;
pub mod tracking;

pub use prelude::{CarbonError, CarbonResult, DeviceId, DeviceKind, EmissionFactor};
