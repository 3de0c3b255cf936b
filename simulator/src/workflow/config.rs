use anyhow::Context;
use carboncore::remote::{RemoteSettings, DEFAULT_COUNTRY, DEFAULT_ENDPOINT};
use carboncore::{DeviceId, DeviceKind};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_API_KEY_ENV: &str = "CARBON_INTERFACE_API_KEY";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    pub device_id: DeviceId,
    pub device_type: DeviceKind,
    pub usage_hours_per_day: f64,
    pub power_rating_kw: f64,
    pub emission_factor: f64,
    pub chart_emission_factor: f64,
    pub duration_secs: u64,
    pub pacing_ms: u64,
    pub seed: Option<u64>,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub remote: RemoteConfig,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            device_id: DeviceId::from(1u64),
            device_type: DeviceKind::Laptop,
            usage_hours_per_day: 8.0,
            power_rating_kw: 0.05,
            emission_factor: 0.5,
            chart_emission_factor: 0.5,
            duration_secs: 10,
            pacing_ms: 1000,
            seed: None,
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("."),
            remote: RemoteConfig::default(),
        }
    }
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub country: String,
    pub api_key: Option<String>,
    pub api_key_env: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            country: DEFAULT_COUNTRY.into(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.into(),
        }
    }
}

impl std::fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("endpoint", &self.endpoint)
            .field("country", &self.country)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_key_env", &self.api_key_env)
            .finish()
    }
}

impl RemoteConfig {
    pub fn settings(&self) -> Option<RemoteSettings> {
        let api_key = self
            .api_key
            .clone()
            .or_else(|| env::var(&self.api_key_env).ok())
            .filter(|key| !key.trim().is_empty())?;
        Some(RemoteSettings {
            endpoint: self.endpoint.clone(),
            country: self.country.clone(),
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_the_laptop_scenario() {
        let cfg = WorkflowConfig::default();
        assert_eq!(cfg.device_type, DeviceKind::Laptop);
        assert_eq!(cfg.usage_hours_per_day, 8.0);
        assert_eq!(cfg.duration_secs, 10);
        assert_eq!(cfg.pacing_ms, 1000);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"device_id: desk-7\ndevice_type: desktop\nduration_secs: 3\npacing_ms: 0\nremote:\n  country: gb\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.device_id, DeviceId::from("desk-7"));
        assert_eq!(cfg.device_type, DeviceKind::Desktop);
        assert_eq!(cfg.duration_secs, 3);
        assert_eq!(cfg.emission_factor, 0.5);
        assert_eq!(cfg.remote.country, "gb");
        assert_eq!(cfg.remote.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn inline_api_key_enables_remote() {
        let remote = RemoteConfig {
            api_key: Some("inline".into()),
            ..Default::default()
        };
        assert_eq!(remote.settings().unwrap().api_key, "inline");
    }

    #[test]
    fn missing_api_key_disables_remote() {
        let remote = RemoteConfig {
            api_key_env: "CARBON_TRACKER_TEST_UNSET_KEY".into(),
            ..Default::default()
        };
        assert!(remote.settings().is_none());
    }

    #[test]
    fn debug_output_hides_the_credential() {
        let remote = RemoteConfig {
            api_key: Some("secret".into()),
            ..Default::default()
        };
        assert!(!format!("{:?}", remote).contains("secret"));
    }
}
