use crate::workflow::config::WorkflowConfig;
use carboncore::tracking::{FixedDelay, PowerTracker, UniformPowerSource};
use std::time::Duration;

pub fn build_source(config: &WorkflowConfig) -> UniformPowerSource {
    match config.seed {
        Some(seed) => UniformPowerSource::with_seed(seed),
        None => UniformPowerSource::new(),
    }
}

pub fn build_pacer(config: &WorkflowConfig) -> FixedDelay {
    FixedDelay(Duration::from_millis(config.pacing_ms))
}

pub fn build_tracker(config: &WorkflowConfig) -> PowerTracker<UniformPowerSource, FixedDelay> {
    PowerTracker::new(
        config.device_id.clone(),
        build_source(config),
        build_pacer(config),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_follows_config_duration() {
        let config = WorkflowConfig {
            duration_secs: 4,
            pacing_ms: 0,
            seed: Some(11),
            ..Default::default()
        };
        let mut tracker = build_tracker(&config);
        assert_eq!(tracker.device_id(), &config.device_id);
        assert_eq!(tracker.track(config.duration_secs).unwrap().len(), 4);
    }

    #[test]
    fn seeded_configs_replay_the_same_series() {
        let config = WorkflowConfig {
            pacing_ms: 0,
            seed: Some(5),
            ..Default::default()
        };
        let first = build_tracker(&config).track(6).unwrap();
        let second = build_tracker(&config).track(6).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn pacer_uses_configured_interval() {
        let config = WorkflowConfig {
            pacing_ms: 250,
            ..Default::default()
        };
        assert_eq!(build_pacer(&config).0, Duration::from_millis(250));
    }
}
