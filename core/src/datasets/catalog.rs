use crate::datasets::rows::{
    DeviceEmissionRow, DevicePowerRow, MonitoringRow, PowerOverTimeRow, ReductionPotentialRow,
};
use crate::prelude::{CarbonError, CarbonResult};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    PowerOverTime,
    EmissionsByDevice,
    PowerDistribution,
    ReductionPotential,
    RealTimeMonitoring,
}

impl Dataset {
    pub fn file_name(&self) -> &'static str {
        match self {
            Dataset::PowerOverTime => "power_consumption_over_time.csv",
            Dataset::EmissionsByDevice => "total_carbon_emissions_by_device.csv",
            Dataset::PowerDistribution => "power_consumption_distribution.csv",
            Dataset::ReductionPotential => "carbon_emissions_reduction_potential.csv",
            Dataset::RealTimeMonitoring => "real_time_emissions_monitoring.csv",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatasetCatalog {
    dir: PathBuf,
}

impl DatasetCatalog {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_of(&self, dataset: Dataset) -> PathBuf {
        self.dir.join(dataset.file_name())
    }

    pub fn load<T: DeserializeOwned>(&self, dataset: Dataset) -> CarbonResult<Vec<T>> {
        let path = self.path_of(dataset);
        if !path.is_file() {
            return Err(CarbonError::MissingResource(format!(
                "dataset {} not found at {}",
                dataset.file_name(),
                path.display()
            )));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(|e| dataset_error(dataset, e))?;
        reader
            .deserialize()
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| dataset_error(dataset, e))
    }

    pub fn power_over_time(&self) -> CarbonResult<Vec<PowerOverTimeRow>> {
        self.load(Dataset::PowerOverTime)
    }

    pub fn emissions_by_device(&self) -> CarbonResult<Vec<DeviceEmissionRow>> {
        self.load(Dataset::EmissionsByDevice)
    }

    pub fn power_distribution(&self) -> CarbonResult<Vec<DevicePowerRow>> {
        self.load(Dataset::PowerDistribution)
    }

    pub fn reduction_potential(&self) -> CarbonResult<Vec<ReductionPotentialRow>> {
        self.load(Dataset::ReductionPotential)
    }

    pub fn real_time_monitoring(&self) -> CarbonResult<Vec<MonitoringRow>> {
        self.load(Dataset::RealTimeMonitoring)
    }
}

fn dataset_error(dataset: Dataset, err: csv::Error) -> CarbonError {
    CarbonError::Dataset {
        name: dataset.file_name().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::DeviceKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_power_over_time_rows() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(Dataset::PowerOverTime.file_name()),
            "Timestamp,Laptop,Desktop,Monitor,Smartphone\n\
             2024-01-01 00:00, 0.05, 0.2, 0.03, 0.005\n\
             2024-01-01 01:00, 0.04, 0.18, 0.03, 0.004\n",
        )
        .unwrap();

        let rows = DatasetCatalog::new(dir.path()).power_over_time().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].timestamp, "2024-01-01 00:00");
        assert_eq!(rows[1].power_for(&DeviceKind::Desktop), Some(0.18));
        assert_eq!(rows[1].power_for(&DeviceKind::Other("Tv".into())), None);
    }

    #[test]
    fn missing_file_reports_missing_resource() {
        let dir = tempdir().unwrap();
        let err = DatasetCatalog::new(dir.path())
            .emissions_by_device()
            .unwrap_err();
        match err {
            CarbonError::MissingResource(message) => {
                assert!(message.contains("total_carbon_emissions_by_device.csv"))
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn malformed_rows_report_dataset_error() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(Dataset::PowerDistribution.file_name()),
            "Device,Power_Consumption\nLaptop,lots\n",
        )
        .unwrap();
        assert!(matches!(
            DatasetCatalog::new(dir.path()).power_distribution(),
            Err(CarbonError::Dataset { .. })
        ));
    }
}
