use clap::Parser;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;

mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Device carbon tracking session driver")]
struct Args {
    /// Load the session config from YAML; built-in laptop defaults otherwise
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.config {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::default()
    };

    let result = Runner::new(workflow_config).execute()?;

    println!(
        "Session -> samples {}, daily footprint {:.4} kgCO2e, optimized {:.4} kgCO2e, charts {}",
        result.power_series.len(),
        result.daily_footprint,
        result.optimized_footprint,
        result.charts.len()
    );
    if let Some(report) = &result.report {
        println!(
            "Report -> device {}, power {:.4} kWh, carbon {:.4} kgCO2e",
            report.device_id, report.total_power_kwh, report.total_carbon_kgco2e
        );
    }

    match &result.remote_estimate {
        Some(estimate) => println!("Remote estimate -> {}", estimate),
        None => println!("Remote estimate -> unavailable"),
    }
    println!(
        "Metrics -> samples {}, reports {}, skipped {}",
        result.metrics.samples, result.metrics.reports, result.metrics.skipped
    );

    Ok(())
}
