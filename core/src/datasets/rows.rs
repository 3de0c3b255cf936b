use crate::prelude::DeviceKind;
use serde::{Deserialize, Serialize};

/// `power_consumption_over_time`: kW per device column at each timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerOverTimeRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Laptop")]
    pub laptop: f64,
    #[serde(rename = "Desktop")]
    pub desktop: f64,
    #[serde(rename = "Monitor")]
    pub monitor: f64,
    #[serde(rename = "Smartphone")]
    pub smartphone: f64,
}

impl PowerOverTimeRow {
    pub fn power_for(&self, kind: &DeviceKind) -> Option<f64> {
        match kind {
            DeviceKind::Laptop => Some(self.laptop),
            DeviceKind::Desktop => Some(self.desktop),
            DeviceKind::Monitor => Some(self.monitor),
            DeviceKind::Smartphone => Some(self.smartphone),
            DeviceKind::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceEmissionRow {
    #[serde(rename = "Device")]
    pub device: String,
    #[serde(rename = "Total_Emissions")]
    pub total_emissions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePowerRow {
    #[serde(rename = "Device")]
    pub device: String,
    #[serde(rename = "Power_Consumption")]
    pub power_consumption: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReductionPotentialRow {
    #[serde(rename = "Device")]
    pub device: String,
    #[serde(rename = "Current_Emissions")]
    pub current_emissions: f64,
    #[serde(rename = "Reduction_Emissions")]
    pub reduction_emissions: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Current_Power")]
    pub current_power: f64,
    #[serde(rename = "Current_Emissions")]
    pub current_emissions: f64,
}
