use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "CARBON_DATA_DIR";
pub const CHART_FACTOR_ENV: &str = "CARBON_CHART_FACTOR";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_CHART_FACTOR: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub data_dir: PathBuf,
    /// kgCO2e/kWh behind the emissions-over-time chart, independent of any
    /// device calculator.
    pub chart_emission_factor: f64,
}

impl DashboardSettings {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(DATA_DIR_ENV)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let chart_emission_factor = match lookup(CHART_FACTOR_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("{} must be a number, got {:?}: {}", CHART_FACTOR_ENV, raw, e))?,
            None => DEFAULT_CHART_FACTOR,
        };
        Ok(Self {
            data_dir,
            chart_emission_factor,
        })
    }
}
