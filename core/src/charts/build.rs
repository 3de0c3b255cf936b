use crate::charts::model::{
    Axes, Bar, BarChart, LineChart, MonitoringDashboard, PieChart, Series, Slice,
    StackedAreaChart, StackedBarChart,
};
use crate::datasets::rows::{
    DeviceEmissionRow, DevicePowerRow, MonitoringRow, PowerOverTimeRow, ReductionPotentialRow,
};
use crate::math::stats::StatsHelper;
use crate::prelude::{DeviceKind, EmissionFactor};
use crate::tracking::series::PowerSeries;

/// Upper bound of the current-power gauge, in kW.
pub const GAUGE_MAX_KW: f64 = 0.06;

fn timestamps(rows: &[PowerOverTimeRow]) -> Vec<String> {
    rows.iter().map(|row| row.timestamp.clone()).collect()
}

fn device_columns(rows: &[PowerOverTimeRow], scale: f64) -> Vec<Series> {
    DeviceKind::TRACKED
        .iter()
        .map(|kind| {
            let values = rows
                .iter()
                .map(|row| row.power_for(kind).unwrap_or_default() * scale)
                .collect();
            Series::new(kind.label(), values)
        })
        .collect()
}

pub fn power_consumption_over_time(rows: &[PowerOverTimeRow]) -> LineChart {
    LineChart {
        axes: Axes::new("Power Consumption Over Time", "Time", "Power Usage (kW)"),
        categories: timestamps(rows),
        series: device_columns(rows, 1.0),
        y_range: None,
    }
}

pub fn total_carbon_emissions_by_device(rows: &[DeviceEmissionRow]) -> BarChart {
    BarChart {
        axes: Axes::new(
            "Total Carbon Emissions by Device",
            "Device Type",
            "Total Carbon Emissions (kgCO2e)",
        ),
        bars: rows
            .iter()
            .map(|row| Bar {
                label: row.device.clone(),
                value: row.total_emissions,
            })
            .collect(),
    }
}

pub fn power_consumption_distribution(rows: &[DevicePowerRow]) -> PieChart {
    let values: Vec<f64> = rows.iter().map(|row| row.power_consumption).collect();
    let shares = StatsHelper::shares(&values);
    PieChart {
        title: "Power Consumption Distribution".into(),
        slices: rows
            .iter()
            .zip(shares)
            .map(|(row, share)| Slice {
                label: row.device.clone(),
                value: row.power_consumption,
                share,
            })
            .collect(),
    }
}

pub fn carbon_emissions_reduction_potential(rows: &[ReductionPotentialRow]) -> StackedBarChart {
    StackedBarChart {
        axes: Axes::new(
            "Carbon Emissions Reduction Potential",
            "Device Type",
            "Carbon Emissions (kgCO2e)",
        ),
        categories: rows.iter().map(|row| row.device.clone()).collect(),
        layers: vec![
            Series::new(
                "Current Emissions",
                rows.iter().map(|row| row.current_emissions).collect(),
            ),
            Series::new(
                "Post-Reduction Emissions",
                rows.iter().map(|row| row.reduction_emissions).collect(),
            ),
        ],
    }
}

pub fn real_time_emissions_monitoring(rows: &[MonitoringRow]) -> MonitoringDashboard {
    let categories: Vec<String> = rows.iter().map(|row| row.timestamp.clone()).collect();
    let power: Vec<f64> = rows.iter().map(|row| row.current_power).collect();
    let emissions: Vec<f64> = rows.iter().map(|row| row.current_emissions).collect();

    MonitoringDashboard {
        gauge: LineChart {
            axes: Axes::new("Current Power Usage (kW)", "", ""),
            categories: categories.clone(),
            series: vec![Series::new("Current Power", power.clone())],
            y_range: Some((0.0, GAUGE_MAX_KW)),
        },
        power_line: LineChart {
            axes: Axes::new("Real-Time Power Consumption", "Time", "Power Usage (kW)"),
            categories: categories.clone(),
            series: vec![Series::new("Power Usage", power)],
            y_range: None,
        },
        emissions_bar: BarChart {
            axes: Axes::new(
                "Real-Time Carbon Emissions (kgCO2e)",
                "Time",
                "Emissions (kgCO2e)",
            ),
            bars: categories
                .into_iter()
                .zip(&emissions)
                .map(|(label, value)| Bar {
                    label,
                    value: *value,
                })
                .collect(),
        },
        total_emissions: StatsHelper::total(&emissions),
    }
}

/// Per-device emissions derived from the power dataset with a chart-specific
/// factor, independent of any device calculator.
pub fn carbon_emissions_over_time(
    rows: &[PowerOverTimeRow],
    factor: EmissionFactor,
) -> StackedAreaChart {
    StackedAreaChart {
        axes: Axes::new(
            "Device Carbon Emissions Over Time",
            "Time",
            "Carbon Emissions (kgCO2e)",
        ),
        categories: timestamps(rows),
        layers: device_columns(rows, factor.value()),
    }
}

pub fn live_power_usage(series: &PowerSeries) -> LineChart {
    LineChart {
        axes: Axes::new("Real-Time Power Usage", "Time (s)", "Power Usage (kW)"),
        categories: series
            .samples()
            .iter()
            .map(|sample| sample.index.to_string())
            .collect(),
        series: vec![Series::new("Power Usage", series.kilowatts())],
        y_range: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn power_rows() -> Vec<PowerOverTimeRow> {
        vec![
            PowerOverTimeRow {
                timestamp: "00:00".into(),
                laptop: 0.05,
                desktop: 0.2,
                monitor: 0.03,
                smartphone: 0.004,
            },
            PowerOverTimeRow {
                timestamp: "01:00".into(),
                laptop: 0.04,
                desktop: 0.25,
                monitor: 0.02,
                smartphone: 0.006,
            },
        ]
    }

    #[test]
    fn power_over_time_has_one_line_per_device() {
        let chart = power_consumption_over_time(&power_rows());
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Laptop", "Desktop", "Monitor", "Smartphone"]);
        assert_eq!(chart.series[1].values, vec![0.2, 0.25]);
        assert_eq!(chart.categories, vec!["00:00", "01:00"]);
    }

    #[test]
    fn emissions_over_time_scale_by_chart_factor() {
        let factor = EmissionFactor::new(0.5).unwrap();
        let chart = carbon_emissions_over_time(&power_rows(), factor);
        assert_eq!(chart.layers[0].values, vec![0.05 * 0.5, 0.04 * 0.5]);
        let top = chart.cumulative().pop().unwrap();
        assert!((top[0] - (0.05 + 0.2 + 0.03 + 0.004) * 0.5).abs() < 1e-12);
    }

    #[test]
    fn distribution_shares_sum_to_one_hundred() {
        let rows = vec![
            DevicePowerRow {
                device: "Laptop".into(),
                power_consumption: 30.0,
            },
            DevicePowerRow {
                device: "Desktop".into(),
                power_consumption: 70.0,
            },
        ];
        let chart = power_consumption_distribution(&rows);
        assert_eq!(chart.slices[0].share, 30.0);
        let total: f64 = chart.slices.iter().map(|s| s.share).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn reduction_potential_stacks_post_reduction_on_current() {
        let rows = vec![ReductionPotentialRow {
            device: "Monitor".into(),
            current_emissions: 1.0,
            reduction_emissions: 0.9,
        }];
        let chart = carbon_emissions_reduction_potential(&rows);
        assert_eq!(chart.categories, vec!["Monitor"]);
        assert_eq!(chart.layers[0].values, vec![1.0]);
        assert_eq!(chart.layers[1].label, "Post-Reduction Emissions");
    }

    #[test]
    fn monitoring_dashboard_totals_emissions() {
        let rows = vec![
            MonitoringRow {
                timestamp: "t0".into(),
                current_power: 0.03,
                current_emissions: 0.015,
            },
            MonitoringRow {
                timestamp: "t1".into(),
                current_power: 0.05,
                current_emissions: 0.025,
            },
        ];
        let dashboard = real_time_emissions_monitoring(&rows);
        assert_eq!(dashboard.total_emissions, 0.015 + 0.025);
        assert_eq!(dashboard.gauge.y_range, Some((0.0, GAUGE_MAX_KW)));
        assert_eq!(dashboard.emissions_bar.bars[1].label, "t1");
    }

    #[test]
    fn live_usage_indexes_by_second() {
        let chart = live_power_usage(&PowerSeries::from_kilowatts([0.02, 0.03]));
        assert_eq!(chart.categories, vec!["0", "1"]);
        assert_eq!(chart.axes.x_label, "Time (s)");
    }
}
