use crate::prelude::CarbonResult;
use rand::{rngs::StdRng, Rng, SeedableRng};

pub const SIMULATED_MIN_KW: f64 = 0.01;
pub const SIMULATED_MAX_KW: f64 = 0.1;

/// Source of power-draw readings, addressed by sample index.
pub trait PowerSource {
    fn read(&mut self, index: u64) -> CarbonResult<f64>;
}

impl<F> PowerSource for F
where
    F: FnMut(u64) -> CarbonResult<f64>,
{
    fn read(&mut self, index: u64) -> CarbonResult<f64> {
        self(index)
    }
}

/// Simulated meter drawing independent samples uniformly from
/// `[SIMULATED_MIN_KW, SIMULATED_MAX_KW]`.
pub struct UniformPowerSource {
    rng: StdRng,
}

impl UniformPowerSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformPowerSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerSource for UniformPowerSource {
    fn read(&mut self, _index: u64) -> CarbonResult<f64> {
        Ok(self.rng.gen_range(SIMULATED_MIN_KW..=SIMULATED_MAX_KW))
    }
}
