use crate::prelude::{ensure_non_negative, CarbonResult, DeviceId};
use crate::telemetry::log::LogManager;
use crate::tracking::pacing::Pacer;
use crate::tracking::series::PowerSeries;
use crate::tracking::source::PowerSource;

pub struct PowerTracker<S, P> {
    device_id: DeviceId,
    source: S,
    pacer: P,
    logger: LogManager,
}

impl<S: PowerSource, P: Pacer> PowerTracker<S, P> {
    pub fn new(device_id: DeviceId, source: S, pacer: P) -> Self {
        Self {
            device_id,
            source,
            pacer,
            logger: LogManager::new(),
        }
    }

    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    pub fn track(&mut self, duration: u64) -> CarbonResult<PowerSeries> {
        let mut series = PowerSeries::new();
        for index in 0..duration {
            let reading = self.source.read(index)?;
            let kilowatts = ensure_non_negative("power sample", reading)?;
            self.logger.record_sample(&self.device_id, kilowatts);
            series.push(kilowatts);
            self.pacer.pause();
        }
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::CarbonError;
    use crate::tracking::pacing::NoDelay;
    use crate::tracking::source::{UniformPowerSource, SIMULATED_MAX_KW, SIMULATED_MIN_KW};

    struct CountingPacer(usize);

    impl Pacer for CountingPacer {
        fn pause(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn tracker_produces_requested_sample_count() {
        let mut tracker =
            PowerTracker::new(DeviceId::from(1u64), UniformPowerSource::with_seed(3), NoDelay);
        let series = tracker.track(10).unwrap();
        assert_eq!(series.len(), 10);
        assert!(series
            .kilowatts()
            .iter()
            .all(|kw| (SIMULATED_MIN_KW..=SIMULATED_MAX_KW).contains(kw)));
        let expected: f64 = series.kilowatts().iter().sum();
        assert_eq!(series.total(), expected);
    }

    #[test]
    fn zero_duration_yields_empty_series() {
        let mut tracker =
            PowerTracker::new(DeviceId::from("idle"), UniformPowerSource::new(), NoDelay);
        assert!(tracker.track(0).unwrap().is_empty());
    }

    #[test]
    fn tracker_pauses_once_per_sample() {
        let mut tracker = PowerTracker::new(
            DeviceId::from(2u64),
            UniformPowerSource::with_seed(1),
            CountingPacer(0),
        );
        tracker.track(5).unwrap();
        assert_eq!(tracker.pacer.0, 5);
    }

    #[test]
    fn substituted_meter_feeds_the_series() {
        let meter = |index: u64| -> CarbonResult<f64> { Ok(0.25 * (index + 1) as f64) };
        let mut tracker = PowerTracker::new(DeviceId::from("meter"), meter, NoDelay);
        let series = tracker.track(3).unwrap();
        assert_eq!(series.kilowatts(), vec![0.25, 0.5, 0.75]);
        assert_eq!(series.samples()[2].index, 2);
    }

    #[test]
    fn failing_meter_with_huge_duration_returns_error() {
        let meter = |_: u64| -> CarbonResult<f64> {
            Err(CarbonError::Unexpected("meter offline".into()))
        };
        let mut tracker = PowerTracker::new(DeviceId::from("offline"), meter, NoDelay);
        assert!(matches!(
            tracker.track(u64::MAX),
            Err(CarbonError::Unexpected(_))
        ));
    }

    #[test]
    fn negative_meter_reading_is_rejected() {
        let meter = |_: u64| -> CarbonResult<f64> { Ok(-1.0) };
        let mut tracker = PowerTracker::new(DeviceId::from("faulty"), meter, NoDelay);
        assert!(matches!(
            tracker.track(1),
            Err(CarbonError::InvalidArgument(_))
        ));
    }
}
