//! Tabular chart inputs loaded from CSV files.

pub mod catalog;
pub mod rows;

pub use catalog::{Dataset, DatasetCatalog};
pub use rows::{
    DeviceEmissionRow, DevicePowerRow, MonitoringRow, PowerOverTimeRow, ReductionPotentialRow,
};
