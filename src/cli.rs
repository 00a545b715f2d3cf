//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::domain::asset;
use crate::domain::error::DcasimError;
use crate::domain::params::{Frequency, SimulationParams};
use crate::domain::simulation::run_simulation;
use crate::domain::strategy::StrategyResult;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "dcasim", about = "Periodic-investment strategy simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a simulation and write a comparison report
    Simulate {
        #[arg(short, long)]
        config: PathBuf,
        /// Directory of <ASSET>.csv price history files
        #[arg(short, long)]
        data: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Report format: json or csv
        #[arg(long, default_value = "json")]
        format: String,
        /// Override the configured asset id
        #[arg(long)]
        asset: Option<String>,
    },
    /// Validate a simulation configuration without running it
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List assets with price history available
    ListAssets {
        #[arg(short, long)]
        data: PathBuf,
    },
    /// Show the known assets and the data range for one of them
    Info {
        #[arg(long)]
        asset: Option<String>,
        #[arg(short, long)]
        data: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Simulate {
            config,
            data,
            output,
            format,
            asset,
        } => run_simulate(&config, &data, output.as_ref(), &format, asset.as_deref()),
        Command::Validate { config } => run_validate(&config),
        Command::ListAssets { data } => run_list_assets(&data),
        Command::Info { asset, data } => run_info(asset.as_deref(), &data),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = DcasimError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Build SimulationParams from config, applying the application defaults for
/// absent optional keys. Dates and the asset id are required.
pub fn build_params(adapter: &dyn ConfigPort) -> Result<SimulationParams, DcasimError> {
    let asset = require_string(adapter, "simulation", "asset")?;
    let start_date = parse_date(adapter, "start_date")?;
    let end_date = parse_date(adapter, "end_date")?;

    let frequency = match adapter.get_string("simulation", "frequency") {
        None => Frequency::Weekly,
        Some(s) => Frequency::parse(&s).ok_or_else(|| DcasimError::ConfigInvalid {
            section: "simulation".into(),
            key: "frequency".into(),
            reason: format!("expected daily, weekly, or monthly, got {s}"),
        })?,
    };

    let get = |section: &str, key: &str, default: f64| {
        adapter.get_double(section, key).unwrap_or(default)
    };

    Ok(SimulationParams {
        asset,
        frequency,
        base_budget: get("simulation", "base_budget", 500.0),
        start_date,
        end_date,
        extreme_low_threshold: get("dynamic_dca", "extreme_low_threshold", 30.0),
        budget_extreme_low: get("dynamic_dca", "budget_extreme_low", 1000.0),
        low_threshold: get("dynamic_dca", "low_threshold", 40.0),
        budget_low: get("dynamic_dca", "budget_low", 750.0),
        high_threshold: get("dynamic_dca", "high_threshold", 70.0),
        budget_high: get("dynamic_dca", "budget_high", 375.0),
        extreme_high_threshold: get("dynamic_dca", "extreme_high_threshold", 80.0),
        budget_extreme_high: get("dynamic_dca", "budget_extreme_high", 250.0),
        period_growth: get("value_averaging", "period_growth", 500.0),
        max_buy_cap: get("value_averaging", "max_buy_cap", 1500.0),
        max_sell_cap: get("value_averaging", "max_sell_cap", 500.0),
    })
}

fn require_string(
    adapter: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<String, DcasimError> {
    match adapter.get_string(section, key) {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(DcasimError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        }),
    }
}

fn parse_date(adapter: &dyn ConfigPort, key: &str) -> Result<chrono::NaiveDate, DcasimError> {
    let raw = require_string(adapter, "simulation", key)?;
    chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| DcasimError::ConfigInvalid {
        section: "simulation".into(),
        key: key.to_string(),
        reason: format!("invalid {key} format, expected YYYY-MM-DD"),
    })
}

fn run_simulate(
    config_path: &PathBuf,
    data_path: &PathBuf,
    output_path: Option<&PathBuf>,
    format: &str,
    asset_override: Option<&str>,
) -> ExitCode {
    // Stage 1: Load config and build parameters
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let mut params = match build_params(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if let Some(asset) = asset_override {
        params.asset = asset.to_string();
    }

    // Stage 2: Validate parameters before touching any data
    if let Err(e) = params.validate() {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 3: Resolve the asset and fetch its history
    if asset::lookup(&params.asset).is_none() {
        let err = DcasimError::UnknownAsset {
            id: params.asset.clone(),
        };
        eprintln!("error: {err}");
        return (&err).into();
    }

    let data_port = CsvAdapter::new(data_path.clone());
    let series = match data_port.fetch_price_history(&params.asset) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!(
        "Simulating {} from {} to {} ({}, {} source points)",
        params.asset,
        params.start_date,
        params.end_date,
        params.frequency,
        series.len(),
    );

    // Stage 4: Run the three strategies
    let results = match run_simulation(&params, &series) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 5: Print console summary
    print_summary(&results);

    // Stage 6: Write the report
    let default_name = match format {
        "csv" => "results.csv",
        _ => "results.json",
    };
    let output = output_path
        .cloned()
        .unwrap_or_else(|| PathBuf::from(default_name));

    let report: Box<dyn ReportPort> = match format {
        "json" => Box::new(JsonReportAdapter),
        "csv" => Box::new(CsvReportAdapter),
        other => {
            eprintln!("error: unknown report format: {other}");
            return ExitCode::from(2);
        }
    };

    match report.write(&results, &params, &output) {
        Ok(()) => {
            eprintln!("\nReport written to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn print_summary(results: &[StrategyResult]) {
    eprintln!("\n=== Strategy Comparison ===");
    for result in results {
        let m = &result.metrics;
        eprintln!("\n{}", result.strategy_name.label());
        eprintln!("  Invested:      ${:.2}", m.total_usd_invested);
        eprintln!("  Final Value:   ${:.2}", m.final_portfolio_value);
        eprintln!("  Accumulated:   {:.8}", m.total_asset_accumulated);
        eprintln!("  Cost Basis:    ${:.2}", m.average_cost_basis);
        eprintln!("  ROI:           {:.2}%", m.roi_percentage);
        eprintln!("  Max Drawdown:  -{:.2}%", m.max_drawdown);
        eprintln!("  Sharpe Ratio:  {:.2}", m.sharpe_ratio);
    }
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let params = match build_params(&adapter) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Err(e) = params.validate() {
        eprintln!("error: {e}");
        return (&e).into();
    }

    eprintln!("Config validated successfully");
    eprintln!("  asset:      {}", params.asset);
    eprintln!("  frequency:  {}", params.frequency);
    eprintln!("  window:     {} to {}", params.start_date, params.end_date);
    eprintln!("  budget:     ${:.2} per period", params.base_budget);
    ExitCode::SUCCESS
}

fn run_list_assets(data_path: &PathBuf) -> ExitCode {
    let data_port = CsvAdapter::new(data_path.clone());
    let available = match data_port.list_assets() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for id in &available {
        match asset::lookup(id) {
            Some(def) => println!(
                "{}\t{}\t{}",
                def.id,
                def.category.display_name(),
                def.name
            ),
            None => println!("{id}\t(unregistered)"),
        }
    }
    ExitCode::SUCCESS
}

fn run_info(asset_id: Option<&str>, data_path: &PathBuf) -> ExitCode {
    let Some(id) = asset_id else {
        eprintln!("Known assets:");
        for def in asset::ASSET_REGISTRY {
            eprintln!("  {}\t{}", def.id, def.name);
        }
        return ExitCode::SUCCESS;
    };

    let Some(def) = asset::lookup(id) else {
        let err = DcasimError::UnknownAsset { id: id.to_string() };
        eprintln!("error: {err}");
        return (&err).into();
    };

    let data_port = CsvAdapter::new(data_path.clone());
    let series = match data_port.fetch_price_history(def.id) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("{} ({})", def.name, def.id);
    eprintln!("  category: {}", def.category.display_name());
    eprintln!("  unit:     {}", def.unit);
    match (series.first(), series.last()) {
        (Some(first), Some(last)) => {
            eprintln!("  points:   {}", series.len());
            eprintln!("  range:    {} to {}", first.date, last.date);
            let with_indicator = series.iter().filter(|p| p.indicator.is_some()).count();
            eprintln!("  rsi:      {with_indicator} points with readings");
        }
        _ => eprintln!("  no price history"),
    }
    ExitCode::SUCCESS
}
