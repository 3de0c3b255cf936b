use std::thread;
use std::time::Duration;

/// Delay strategy applied after each sample to emulate real-time cadence.
pub trait Pacer {
    fn pause(&mut self);
}

#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn per_second() -> Self {
        Self(Duration::from_secs(1))
    }
}

impl Pacer for FixedDelay {
    fn pause(&mut self) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self) {}
}
