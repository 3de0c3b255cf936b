use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectricityEstimateRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub electricity_unit: String,
    pub electricity_value: f64,
    pub country: String,
}

impl ElectricityEstimateRequest {
    pub fn kwh(energy_kwh: f64, country: &str) -> Self {
        Self {
            kind: "electricity".into(),
            electricity_unit: "kwh".into(),
            electricity_value: energy_kwh,
            country: country.to_ascii_lowercase(),
        }
    }
}
