use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque device identifier, either a numeric id or a free-form label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeviceId {
    Number(u64),
    Label(String),
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceId::Number(id) => write!(f, "{}", id),
            DeviceId::Label(label) => f.write_str(label),
        }
    }
}

impl From<u64> for DeviceId {
    fn from(id: u64) -> Self {
        DeviceId::Number(id)
    }
}

impl From<&str> for DeviceId {
    fn from(label: &str) -> Self {
        DeviceId::Label(label.to_string())
    }
}

impl From<String> for DeviceId {
    fn from(label: String) -> Self {
        DeviceId::Label(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceKind {
    Laptop,
    Desktop,
    Monitor,
    Smartphone,
    Other(String),
}

impl DeviceKind {
    /// The four device columns of the power datasets, in column order.
    pub const TRACKED: [DeviceKind; 4] = [
        DeviceKind::Laptop,
        DeviceKind::Desktop,
        DeviceKind::Monitor,
        DeviceKind::Smartphone,
    ];

    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "laptop" => DeviceKind::Laptop,
            "desktop" => DeviceKind::Desktop,
            "monitor" => DeviceKind::Monitor,
            "smartphone" => DeviceKind::Smartphone,
            _ => DeviceKind::Other(label.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DeviceKind::Laptop => "Laptop",
            DeviceKind::Desktop => "Desktop",
            DeviceKind::Monitor => "Monitor",
            DeviceKind::Smartphone => "Smartphone",
            DeviceKind::Other(label) => label,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for DeviceKind {
    fn from(label: String) -> Self {
        DeviceKind::parse(&label)
    }
}

impl From<DeviceKind> for String {
    fn from(kind: DeviceKind) -> Self {
        kind.label().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactor(f64);

impl EmissionFactor {
    pub fn new(kg_per_kwh: f64) -> CarbonResult<Self> {
        ensure_non_negative("emission factor", kg_per_kwh)?;
        Ok(Self(kg_per_kwh))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CarbonError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("empty input: {0}")]
    EmptyInput(String),
    #[error("missing resource: {0}")]
    MissingResource(String),
    #[error("malformed dataset {name}: {message}")]
    Dataset { name: String, message: String },
    #[error("remote service error{}: {message}", status_suffix(.status))]
    RemoteService {
        status: Option<u16>,
        message: String,
    },
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

pub type CarbonResult<T> = Result<T, CarbonError>;

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" (status {})", code))
        .unwrap_or_default()
}

pub fn ensure_non_negative(name: &str, value: f64) -> CarbonResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(CarbonError::InvalidArgument(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(value)
}
