use std::sync::Mutex;

pub struct RunMetrics {
    inner: Mutex<Counters>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSnapshot {
    pub samples: usize,
    pub reports: usize,
    pub skipped: usize,
}

#[derive(Default)]
struct Counters {
    samples: usize,
    reports: usize,
    skipped: usize,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counters::default()),
        }
    }

    pub fn record_samples(&self, count: usize) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.samples += count;
        }
    }

    pub fn record_report(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.reports += 1;
        }
    }

    pub fn record_skipped(&self) {
        if let Ok(mut counters) = self.inner.lock() {
            counters.skipped += 1;
        }
    }

    pub fn snapshot(&self) -> RunSnapshot {
        if let Ok(counters) = self.inner.lock() {
            RunSnapshot {
                samples: counters.samples,
                reports: counters.reports,
                skipped: counters.skipped,
            }
        } else {
            RunSnapshot::default()
        }
    }
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = RunMetrics::new();
        metrics.record_samples(10);
        metrics.record_report();
        metrics.record_skipped();
        metrics.record_skipped();
        assert_eq!(
            metrics.snapshot(),
            RunSnapshot {
                samples: 10,
                reports: 1,
                skipped: 2
            }
        );
    }
}
