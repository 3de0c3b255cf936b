use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Axes {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub axes: Axes,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    /// Fixed y range; `None` scales to the data.
    pub y_range: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub axes: Axes,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBarChart {
    pub axes: Axes,
    pub categories: Vec<String>,
    pub layers: Vec<Series>,
}

/// Areas stacked in layer order; [`StackedAreaChart::cumulative`] gives the
/// upper edge of every layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedAreaChart {
    pub axes: Axes,
    pub categories: Vec<String>,
    pub layers: Vec<Series>,
}

impl StackedAreaChart {
    pub fn cumulative(&self) -> Vec<Vec<f64>> {
        let mut running = vec![0.0; self.categories.len()];
        self.layers
            .iter()
            .map(|layer| {
                for (edge, value) in running.iter_mut().zip(&layer.values) {
                    *edge += value;
                }
                running.clone()
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringDashboard {
    pub gauge: LineChart,
    pub power_line: LineChart,
    pub emissions_bar: BarChart,
    pub total_emissions: f64,
}

impl MonitoringDashboard {
    pub fn summary_text(&self) -> String {
        format!("Total Emissions Today: {:.4} kgCO2e", self.total_emissions)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Chart {
    Line(LineChart),
    Bar(BarChart),
    Pie(PieChart),
    StackedBar(StackedBarChart),
    Dashboard(MonitoringDashboard),
    StackedArea(StackedAreaChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Line(chart) => &chart.axes.title,
            Chart::Bar(chart) => &chart.axes.title,
            Chart::Pie(chart) => &chart.title,
            Chart::StackedBar(chart) => &chart.axes.title,
            Chart::Dashboard(_) => "Real-Time Emissions Monitoring",
            Chart::StackedArea(chart) => &chart.axes.title,
        }
    }

    pub fn point_count(&self) -> usize {
        match self {
            Chart::Line(chart) => chart.series.iter().map(|s| s.values.len()).sum(),
            Chart::Bar(chart) => chart.bars.len(),
            Chart::Pie(chart) => chart.slices.len(),
            Chart::StackedBar(chart) => chart.layers.iter().map(|s| s.values.len()).sum(),
            Chart::Dashboard(chart) => chart.emissions_bar.bars.len(),
            Chart::StackedArea(chart) => chart.layers.iter().map(|s| s.values.len()).sum(),
        }
    }
}
