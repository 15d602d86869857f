use std::path::Path;

use clap::Parser;
use ocean_rates::domain::model::{DailyAverage, RateRow, DEFAULT_MIN_SAMPLE};
use ocean_rates::utils::{logger, validation::Validate};
use ocean_rates::{CliConfig, CsvStore, DatasetManifest, RatesEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ocean-rates CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let (store, manifest_min_count) = match open_store(&config) {
        Ok(opened) => opened,
        Err(e) => {
            tracing::error!("Failed to open dataset: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // CLI flag wins over the manifest's dataset-level default.
    let min_count = config
        .min_count
        .or(manifest_min_count)
        .unwrap_or(DEFAULT_MIN_SAMPLE);
    let query = config.to_query()?.with_min_count(min_count);

    let engine = RatesEngine::new(store);
    match engine.get_daily_averages(&query).await {
        Ok(averages) => {
            let rows: Vec<RateRow> = averages.iter().map(DailyAverage::to_row).collect();
            let output = if config.pretty {
                serde_json::to_string_pretty(&rows)?
            } else {
                serde_json::to_string(&rows)?
            };
            println!("{}", output);
            tracing::info!("Reported averages for {} day(s)", rows.len());
        }
        Err(e) => {
            tracing::error!("Rate query failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn open_store(config: &CliConfig) -> ocean_rates::Result<(CsvStore, Option<usize>)> {
    match &config.config {
        Some(manifest_path) => {
            let manifest = DatasetManifest::from_file(manifest_path)?;
            manifest.validate()?;

            let base_dir = Path::new(manifest_path)
                .parent()
                .unwrap_or_else(|| Path::new("."));
            let (regions, ports, prices) = manifest.file_paths(base_dir);
            let store = CsvStore::from_files(regions, ports, prices)?;
            Ok((store, manifest.default_min_count()))
        }
        None => Ok((CsvStore::open(&config.data_dir)?, None)),
    }
}
