use crate::prelude::{ensure_non_negative, CarbonResult, DeviceKind, EmissionFactor};
use crate::tracking::series::{CarbonSeries, PowerSeries};

/// Converts power draw into carbon mass for one device type.
#[derive(Debug, Clone)]
pub struct EmissionCalculator {
    device_kind: DeviceKind,
    usage_hours_per_day: f64,
    factor: EmissionFactor,
}

impl EmissionCalculator {
    pub fn new(
        device_kind: DeviceKind,
        usage_hours_per_day: f64,
        factor: EmissionFactor,
    ) -> CarbonResult<Self> {
        ensure_non_negative("usage hours per day", usage_hours_per_day)?;
        Ok(Self {
            device_kind,
            usage_hours_per_day,
            factor,
        })
    }

    pub fn device_kind(&self) -> &DeviceKind {
        &self.device_kind
    }

    /// Daily energy in kWh for a power rating in kW.
    pub fn daily_energy_kwh(&self, power_rating_kw: f64) -> CarbonResult<f64> {
        let rating = ensure_non_negative("power rating", power_rating_kw)?;
        Ok(self.usage_hours_per_day * rating)
    }

    pub fn calculate_daily_footprint(&self, power_rating_kw: f64) -> CarbonResult<f64> {
        let energy = self.daily_energy_kwh(power_rating_kw)?;
        Ok(energy * self.factor.value())
    }

    pub fn carbon_series(&self, power: &PowerSeries) -> CarbonSeries {
        let factor = self.factor.value();
        CarbonSeries::from_values(
            power
                .samples()
                .iter()
                .map(|sample| sample.kilowatts * factor)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::CarbonError;

    fn laptop(hours: f64, factor: f64) -> EmissionCalculator {
        EmissionCalculator::new(
            DeviceKind::Laptop,
            hours,
            EmissionFactor::new(factor).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn laptop_scenario_yields_exact_footprint() {
        let calculator = laptop(8.0, 0.5);
        assert_eq!(calculator.calculate_daily_footprint(0.05).unwrap(), 0.2);
        assert_eq!(calculator.daily_energy_kwh(0.05).unwrap(), 0.4);
    }

    #[test]
    fn footprint_is_product_of_inputs() {
        for &(hours, rating, factor) in &[(0.0, 0.3, 0.5), (2.5, 0.0, 0.9), (24.0, 0.12, 0.0)] {
            let calculator = laptop(hours, factor);
            assert_eq!(
                calculator.calculate_daily_footprint(rating).unwrap(),
                hours * rating * factor
            );
        }
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(matches!(
            EmissionCalculator::new(DeviceKind::Desktop, -1.0, EmissionFactor::new(0.5).unwrap()),
            Err(CarbonError::InvalidArgument(_))
        ));
        assert!(matches!(
            laptop(8.0, 0.5).calculate_daily_footprint(-0.05),
            Err(CarbonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn carbon_series_scales_each_sample_by_the_factor() {
        let calculator = laptop(8.0, 0.5);
        let power = PowerSeries::from_kilowatts([0.02, 0.04, 0.1]);
        let carbon = calculator.carbon_series(&power);
        assert_eq!(carbon.len(), power.len());
        for (sample, value) in power.samples().iter().zip(carbon.values()) {
            assert_eq!(*value, sample.kilowatts * 0.5);
        }
    }
}
