use crate::prelude::{ensure_non_negative, CarbonError, CarbonResult};

/// Usage kept after optimization: a flat 10% cut.
pub const DEFAULT_REDUCTION_RATIO: f64 = 0.9;

#[derive(Debug, Clone, Copy)]
pub struct ReductionStrategy {
    ratio: f64,
}

impl ReductionStrategy {
    pub fn new() -> Self {
        Self {
            ratio: DEFAULT_REDUCTION_RATIO,
        }
    }

    pub fn with_ratio(ratio: f64) -> CarbonResult<Self> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(CarbonError::InvalidArgument(format!(
                "reduction ratio must lie in [0, 1], got {}",
                ratio
            )));
        }
        Ok(Self { ratio })
    }

    pub fn optimize_device_usage(&self, current_usage: f64) -> CarbonResult<f64> {
        let current = ensure_non_negative("current usage", current_usage)?;
        Ok(current * self.ratio)
    }
}

impl Default for ReductionStrategy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_cuts_ten_percent() {
        let strategy = ReductionStrategy::new();
        assert_eq!(strategy.optimize_device_usage(0.0).unwrap(), 0.0);
        for value in [0.2, 1.0, 37.5] {
            assert_eq!(strategy.optimize_device_usage(value).unwrap(), 0.9 * value);
        }
    }

    #[test]
    fn negative_usage_is_rejected() {
        assert!(matches!(
            ReductionStrategy::new().optimize_device_usage(-1.0),
            Err(CarbonError::InvalidArgument(_))
        ));
    }

    #[test]
    fn ratio_must_be_a_fraction() {
        assert!(ReductionStrategy::with_ratio(1.5).is_err());
        assert_eq!(
            ReductionStrategy::with_ratio(0.5)
                .unwrap()
                .optimize_device_usage(4.0)
                .unwrap(),
            2.0
        );
    }
}
