use crate::prelude::DeviceId;
use log::{info, warn};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn record_sample(&self, device_id: &DeviceId, kilowatts: f64) {
        info!("{}", Self::sample_line(device_id, kilowatts));
    }

    pub fn record_skip(&self, step: &str, reason: &dyn std::fmt::Display) {
        warn!("Skipping {}: {}", step, reason);
    }

    pub fn sample_line(device_id: &DeviceId, kilowatts: f64) -> String {
        format!(
            "Device {} - Current Power Usage: {:.3} kW",
            device_id, kilowatts
        )
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_line_uses_three_decimals() {
        assert_eq!(
            LogManager::sample_line(&DeviceId::from(1u64), 0.04567),
            "Device 1 - Current Power Usage: 0.046 kW"
        );
    }
}
