use crate::generator::profile::build_tracker;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use carboncore::charts::{Chart, ChartBook, ChartId};
use carboncore::datasets::{Dataset, DatasetCatalog};
use carboncore::footprint::{EmissionCalculator, ReductionStrategy};
use carboncore::remote::RemoteEstimator;
use carboncore::report::{EmissionReport, ReportWriter};
use carboncore::telemetry::{LogManager, RunMetrics, RunSnapshot};
use carboncore::tracking::PowerSeries;
use carboncore::EmissionFactor;
use serde_json::Value;

pub struct WorkflowResult {
    pub daily_footprint: f64,
    pub optimized_footprint: f64,
    pub power_series: PowerSeries,
    pub report: Option<EmissionReport>,
    pub remote_estimate: Option<Value>,
    pub charts: Vec<(ChartId, Chart)>,
    pub metrics: RunSnapshot,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let config = &self.config;
        let logger = LogManager::new();
        let metrics = RunMetrics::new();
        let catalog = DatasetCatalog::new(&config.data_dir);

        self.preload_datasets(&catalog, &logger, &metrics);

        let factor = EmissionFactor::new(config.emission_factor)
            .context("building device emission factor")?;
        let calculator =
            EmissionCalculator::new(config.device_type.clone(), config.usage_hours_per_day, factor)
                .context("building emission calculator")?;
        let daily_footprint = calculator
            .calculate_daily_footprint(config.power_rating_kw)
            .context("computing daily footprint")?;
        logger.record(&format!(
            "Daily Carbon Footprint for {}: {:.4} kgCO2e",
            calculator.device_kind(),
            daily_footprint
        ));

        let mut tracker = build_tracker(config);
        let power_series = tracker
            .track(config.duration_secs)
            .context("tracking device power")?;
        metrics.record_samples(power_series.len());

        let carbon_series = calculator.carbon_series(&power_series);
        let writer = ReportWriter::new(&config.output_dir);
        let report = match writer.generate(config.device_id.clone(), &power_series, &carbon_series)
        {
            Ok(report) => {
                metrics.record_report();
                Some(report)
            }
            Err(err) => {
                logger.record_skip("emission report", &err);
                metrics.record_skipped();
                None
            }
        };

        let optimized_footprint = ReductionStrategy::new()
            .optimize_device_usage(daily_footprint)
            .context("estimating reduction")?;
        logger.record(&format!(
            "Optimized Daily Carbon Footprint for {}: {:.4} kgCO2e",
            calculator.device_kind(),
            optimized_footprint
        ));

        let remote_estimate = self.remote_estimate(&calculator, &logger, &metrics)?;

        let chart_factor = EmissionFactor::new(config.chart_emission_factor)
            .context("building chart emission factor")?;
        let book = ChartBook::new(catalog, chart_factor);
        let mut charts = Vec::new();
        for (id, result) in book.build_all() {
            match result {
                Ok(chart) => {
                    logger.record(&format!(
                        "Chart '{}' ready with {} points",
                        chart.title(),
                        chart.point_count()
                    ));
                    charts.push((id, chart));
                }
                Err(err) => {
                    logger.record_skip(&format!("chart '{}'", id.name()), &err);
                    metrics.record_skipped();
                }
            }
        }

        let snapshot = metrics.snapshot();
        logger.record(&format!(
            "Run complete: {} samples, {} reports, {} skipped steps",
            snapshot.samples, snapshot.reports, snapshot.skipped
        ));

        Ok(WorkflowResult {
            daily_footprint,
            optimized_footprint,
            power_series,
            report,
            remote_estimate,
            charts,
            metrics: snapshot,
        })
    }

    fn preload_datasets(&self, catalog: &DatasetCatalog, logger: &LogManager, metrics: &RunMetrics) {
        for dataset in [
            Dataset::PowerOverTime,
            Dataset::EmissionsByDevice,
            Dataset::ReductionPotential,
        ] {
            let loaded = match dataset {
                Dataset::PowerOverTime => catalog.power_over_time().map(|rows| rows.len()),
                Dataset::EmissionsByDevice => catalog.emissions_by_device().map(|rows| rows.len()),
                _ => catalog.reduction_potential().map(|rows| rows.len()),
            };
            match loaded {
                Ok(count) => logger.record(&format!(
                    "Loaded {} rows from {}",
                    count,
                    dataset.file_name()
                )),
                Err(err) => {
                    logger.record_skip(&format!("dataset {}", dataset.file_name()), &err);
                    metrics.record_skipped();
                }
            }
        }
    }

    fn remote_estimate(
        &self,
        calculator: &EmissionCalculator,
        logger: &LogManager,
        metrics: &RunMetrics,
    ) -> anyhow::Result<Option<Value>> {
        let Some(settings) = self.config.remote.settings() else {
            logger.record("No API key configured; skipping remote emission estimate");
            return Ok(None);
        };

        let energy = calculator
            .daily_energy_kwh(self.config.power_rating_kw)
            .context("computing daily energy")?;
        let estimate = RemoteEstimator::new(settings).estimate(energy);
        match &estimate {
            Some(body) => logger.record(&format!("Remote estimate: {}", body)),
            None => metrics.record_skipped(),
        }
        Ok(estimate)
    }
}
