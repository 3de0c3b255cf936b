use crate::prelude::{CarbonError, CarbonResult, DeviceId};
use crate::tracking::series::{CarbonSeries, PowerSeries};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionReport {
    #[serde(rename = "Device ID")]
    pub device_id: DeviceId,
    #[serde(rename = "Total Power Consumption (kWh)")]
    pub total_power_kwh: f64,
    #[serde(rename = "Total Carbon Emission (kgCO2e)")]
    pub total_carbon_kgco2e: f64,
}

impl EmissionReport {
    pub fn from_series(
        device_id: DeviceId,
        power: &PowerSeries,
        carbon: &CarbonSeries,
    ) -> CarbonResult<Self> {
        if power.is_empty() {
            return Err(CarbonError::EmptyInput(format!(
                "power series for device {} has no samples",
                device_id
            )));
        }
        if carbon.is_empty() {
            return Err(CarbonError::EmptyInput(format!(
                "carbon series for device {} has no samples",
                device_id
            )));
        }
        if power.len() != carbon.len() {
            return Err(CarbonError::InvalidArgument(format!(
                "power series ({}) and carbon series ({}) differ in length",
                power.len(),
                carbon.len()
            )));
        }

        Ok(Self {
            device_id,
            total_power_kwh: power.total(),
            total_carbon_kgco2e: carbon.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::footprint::EmissionCalculator;
    use crate::prelude::{DeviceKind, EmissionFactor};

    fn calculator() -> EmissionCalculator {
        EmissionCalculator::new(DeviceKind::Laptop, 8.0, EmissionFactor::new(0.5).unwrap())
            .unwrap()
    }

    #[test]
    fn report_holds_exact_sums() {
        let power = PowerSeries::from_kilowatts([0.02, 0.05, 0.08]);
        let carbon = calculator().carbon_series(&power);
        let report = EmissionReport::from_series(DeviceId::from(1u64), &power, &carbon).unwrap();
        assert_eq!(report.total_power_kwh, 0.02 + 0.05 + 0.08);
        assert_eq!(report.total_carbon_kgco2e, 0.02 * 0.5 + 0.05 * 0.5 + 0.08 * 0.5);
    }

    #[test]
    fn empty_series_are_rejected() {
        let power = PowerSeries::new();
        let carbon = calculator().carbon_series(&power);
        assert!(matches!(
            EmissionReport::from_series(DeviceId::from(1u64), &power, &carbon),
            Err(CarbonError::EmptyInput(_))
        ));
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let power = PowerSeries::from_kilowatts([0.02, 0.05]);
        let carbon = calculator().carbon_series(&PowerSeries::from_kilowatts([0.02]));
        assert!(matches!(
            EmissionReport::from_series(DeviceId::from(1u64), &power, &carbon),
            Err(CarbonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn serializes_with_readable_keys() {
        let report = EmissionReport {
            device_id: DeviceId::from(1u64),
            total_power_kwh: 0.5,
            total_carbon_kgco2e: 0.25,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["Device ID"], 1);
        assert_eq!(value["Total Power Consumption (kWh)"], 0.5);
        assert_eq!(value["Total Carbon Emission (kgCO2e)"], 0.25);
    }
}
