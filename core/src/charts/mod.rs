//! Chart models built from the datasets. Rendering lives in the visualizer;
//! everything here is plain data so it can be tested and logged.

pub mod build;
pub mod model;

pub use model::{
    Axes, Bar, BarChart, Chart, LineChart, MonitoringDashboard, PieChart, Series, Slice,
    StackedAreaChart, StackedBarChart,
};

use crate::datasets::{Dataset, DatasetCatalog};
use crate::prelude::{CarbonResult, EmissionFactor};

/// The six dataset-backed charts, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartId {
    PowerOverTime,
    EmissionsByDevice,
    PowerDistribution,
    ReductionPotential,
    RealTimeMonitoring,
    EmissionsOverTime,
}

impl ChartId {
    pub const ALL: [ChartId; 6] = [
        ChartId::PowerOverTime,
        ChartId::EmissionsByDevice,
        ChartId::PowerDistribution,
        ChartId::ReductionPotential,
        ChartId::RealTimeMonitoring,
        ChartId::EmissionsOverTime,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChartId::PowerOverTime => "Power over time",
            ChartId::EmissionsByDevice => "Emissions by device",
            ChartId::PowerDistribution => "Power distribution",
            ChartId::ReductionPotential => "Reduction potential",
            ChartId::RealTimeMonitoring => "Real-time monitoring",
            ChartId::EmissionsOverTime => "Emissions over time",
        }
    }

    pub fn dataset(&self) -> Dataset {
        match self {
            ChartId::PowerOverTime | ChartId::EmissionsOverTime => Dataset::PowerOverTime,
            ChartId::EmissionsByDevice => Dataset::EmissionsByDevice,
            ChartId::PowerDistribution => Dataset::PowerDistribution,
            ChartId::ReductionPotential => Dataset::ReductionPotential,
            ChartId::RealTimeMonitoring => Dataset::RealTimeMonitoring,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartBook {
    catalog: DatasetCatalog,
    emission_factor: EmissionFactor,
}

impl ChartBook {
    /// `emission_factor` only feeds the emissions-over-time chart.
    pub fn new(catalog: DatasetCatalog, emission_factor: EmissionFactor) -> Self {
        Self {
            catalog,
            emission_factor,
        }
    }

    pub fn build(&self, id: ChartId) -> CarbonResult<Chart> {
        let chart = match id {
            ChartId::PowerOverTime => {
                Chart::Line(build::power_consumption_over_time(&self.catalog.power_over_time()?))
            }
            ChartId::EmissionsByDevice => Chart::Bar(build::total_carbon_emissions_by_device(
                &self.catalog.emissions_by_device()?,
            )),
            ChartId::PowerDistribution => Chart::Pie(build::power_consumption_distribution(
                &self.catalog.power_distribution()?,
            )),
            ChartId::ReductionPotential => Chart::StackedBar(
                build::carbon_emissions_reduction_potential(&self.catalog.reduction_potential()?),
            ),
            ChartId::RealTimeMonitoring => Chart::Dashboard(
                build::real_time_emissions_monitoring(&self.catalog.real_time_monitoring()?),
            ),
            ChartId::EmissionsOverTime => Chart::StackedArea(build::carbon_emissions_over_time(
                &self.catalog.power_over_time()?,
                self.emission_factor,
            )),
        };
        Ok(chart)
    }

    pub fn build_all(&self) -> Vec<(ChartId, CarbonResult<Chart>)> {
        ChartId::ALL.iter().map(|&id| (id, self.build(id))).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::CarbonError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_datasets_only_fail_their_charts() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(Dataset::EmissionsByDevice.file_name()),
            "Device,Total_Emissions\nLaptop,1.2\nDesktop,4.8\n",
        )
        .unwrap();

        let book = ChartBook::new(
            DatasetCatalog::new(dir.path()),
            EmissionFactor::new(0.5).unwrap(),
        );
        let results = book.build_all();
        assert_eq!(results.len(), 6);
        for (id, result) in results {
            match id {
                ChartId::EmissionsByDevice => {
                    let chart = result.unwrap();
                    assert_eq!(chart.title(), "Total Carbon Emissions by Device");
                    assert_eq!(chart.point_count(), 2);
                }
                _ => assert!(matches!(result, Err(CarbonError::MissingResource(_)))),
            }
        }
    }

    #[test]
    fn power_dataset_backs_two_charts() {
        assert_eq!(ChartId::PowerOverTime.dataset(), Dataset::PowerOverTime);
        assert_eq!(ChartId::EmissionsOverTime.dataset(), Dataset::PowerOverTime);
    }
}
