use crate::prelude::{ensure_non_negative, CarbonError, CarbonResult};
use crate::remote::request::ElectricityEstimateRequest;
use log::{info, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ENDPOINT: &str = "https://www.carboninterface.com/api/v1/estimates";
pub const DEFAULT_COUNTRY: &str = "us";

#[derive(Clone, Serialize, Deserialize)]
pub struct RemoteSettings {
    pub endpoint: String,
    pub country: String,
    pub api_key: String,
}

impl std::fmt::Debug for RemoteSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteSettings")
            .field("endpoint", &self.endpoint)
            .field("country", &self.country)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// One blocking request per call, no retries.
pub struct RemoteEstimator {
    settings: RemoteSettings,
    client: Client,
}

impl RemoteEstimator {
    pub fn new(settings: RemoteSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }

    pub fn try_estimate(&self, energy_kwh: f64) -> CarbonResult<Value> {
        let energy = ensure_non_negative("energy consumed", energy_kwh)?;
        let body = ElectricityEstimateRequest::kwh(energy, &self.settings.country);

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .map_err(|e| CarbonError::RemoteService {
                status: None,
                message: format!("request to {} failed: {}", self.settings.endpoint, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(CarbonError::RemoteService {
                status: Some(status.as_u16()),
                message: error_text,
            });
        }

        response.json::<Value>().map_err(|e| CarbonError::RemoteService {
            status: Some(status.as_u16()),
            message: format!("failed to parse estimate: {}", e),
        })
    }

    /// Recoverable form of [`try_estimate`](Self::try_estimate): failures are
    /// logged and yield `None`.
    pub fn estimate(&self, energy_kwh: f64) -> Option<Value> {
        match self.try_estimate(energy_kwh) {
            Ok(estimate) => {
                info!("Remote estimate received for {:.4} kWh", energy_kwh);
                Some(estimate)
            }
            Err(CarbonError::RemoteService {
                status: Some(code),
                message,
            }) => {
                warn!("Error: {} - {}", code, message);
                None
            }
            Err(err) => {
                warn!("Remote estimate unavailable: {}", err);
                None
            }
        }
    }
}
