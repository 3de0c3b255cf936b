use crate::math::stats::StatsHelper;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerSample {
    pub index: u64,
    pub kilowatts: f64,
}

/// Only the tracker appends; everyone else sees an immutable slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerSeries {
    samples: Vec<PowerSample>,
}

impl PowerSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_kilowatts<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let samples = values
            .into_iter()
            .enumerate()
            .map(|(index, kilowatts)| PowerSample {
                index: index as u64,
                kilowatts,
            })
            .collect();
        Self { samples }
    }

    pub(crate) fn push(&mut self, kilowatts: f64) {
        let index = self.samples.len() as u64;
        self.samples.push(PowerSample { index, kilowatts });
    }

    pub fn samples(&self) -> &[PowerSample] {
        &self.samples
    }

    pub fn kilowatts(&self) -> Vec<f64> {
        self.samples.iter().map(|sample| sample.kilowatts).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn total(&self) -> f64 {
        StatsHelper::total(&self.kilowatts())
    }
}

/// kgCO2e per sample, index-aligned with a [`PowerSeries`]. Built only by
/// `EmissionCalculator::carbon_series`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarbonSeries {
    values: Vec<f64>,
}

impl CarbonSeries {
    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn total(&self) -> f64 {
        StatsHelper::total(&self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_monotonic_indices() {
        let mut series = PowerSeries::new();
        series.push(0.05);
        series.push(0.02);
        let indices: Vec<u64> = series.samples().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(series.kilowatts(), vec![0.05, 0.02]);
    }

    #[test]
    fn totals_are_plain_sums() {
        let series = PowerSeries::from_kilowatts([0.01, 0.02, 0.03]);
        assert_eq!(series.total(), 0.01 + 0.02 + 0.03);
        assert!(PowerSeries::new().is_empty());
    }
}
