use crate::prelude::{CarbonResult, DeviceId};
use crate::report::record::EmissionReport;
use crate::tracking::series::{CarbonSeries, PowerSeries};
use log::info;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn report_path(&self, device_id: &DeviceId) -> PathBuf {
        self.output_dir
            .join(format!("report_device_{}.json", file_component(device_id)))
    }

    pub fn write(&self, report: &EmissionReport) -> CarbonResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        report.serialize(&mut serializer)?;

        let path = self.report_path(&report.device_id);
        fs::write(&path, buffer)?;
        Ok(path)
    }

    pub fn generate(
        &self,
        device_id: DeviceId,
        power: &PowerSeries,
        carbon: &CarbonSeries,
    ) -> CarbonResult<EmissionReport> {
        let report = EmissionReport::from_series(device_id, power, carbon)?;
        let path = self.write(&report)?;
        info!("Report generated for Device {} at {}", report.device_id, path.display());
        Ok(report)
    }
}

/// Percent-encodes everything outside `[A-Za-z0-9._-]`, so distinct ids map
/// to distinct names and no id can leave the output directory.
fn file_component(device_id: &DeviceId) -> String {
    let raw = device_id.to_string();
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' => encoded.push(byte as char),
            b'.' if raw.bytes().any(|b| b != b'.') => encoded.push('.'),
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    encoded
}
