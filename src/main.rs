//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `node_enrich` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and the exit-code policy
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process;

use node_enrich::config::{
    DEFAULT_ASN_DB_PATH, DEFAULT_GEO_DB_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_STORE_PATH,
};
use node_enrich::initialization::init_logger_with;
use node_enrich::{run_enrichment, Config, FailOn, LogFormat, LogLevel};

/// Enrich crawled nodes with GeoIP and ASN data and write the map feed.
#[derive(Debug, Parser)]
#[command(name = "node_enrich", version, about)]
struct Cli {
    /// SQLite node store written by the crawler
    #[arg(long = "store", default_value = DEFAULT_STORE_PATH)]
    store_path: PathBuf,

    /// MaxMind City index (.mmdb)
    #[arg(long = "geo-db", default_value = DEFAULT_GEO_DB_PATH)]
    geo_db_path: PathBuf,

    /// MaxMind ASN index (.mmdb)
    #[arg(long = "asn-db", default_value = DEFAULT_ASN_DB_PATH)]
    asn_db_path: PathBuf,

    /// Output JSON file (replaced atomically)
    #[arg(long = "output", default_value = DEFAULT_OUTPUT_PATH)]
    output_path: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Exit with code 2 when the run skipped records
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    fail_on: FailOn,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            store_path: cli.store_path,
            geo_db_path: cli.geo_db_path,
            asn_db_path: cli.asn_db_path,
            output_path: cli.output_path,
            log_level: cli.log_level,
            log_format: cli.log_format,
            fail_on: cli.fail_on,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config: Config = Cli::parse().into();

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    match run_enrichment(&config).await {
        Ok(report) => {
            println!(
                "Enriched {} node{} ({} skipped, {} lookup warnings) in {:.1}s",
                report.enriched,
                if report.enriched == 1 { "" } else { "s" },
                report.skipped,
                report.lookup_warnings,
                report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_path.display());

            let exit_code = config.fail_on.exit_code(report.skipped);
            if exit_code != 0 {
                eprintln!(
                    "{} record{} skipped (--fail-on any-skipped)",
                    report.skipped,
                    if report.skipped == 1 { "" } else { "s" }
                );
                process::exit(exit_code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("node_enrich error: {:#}", e);
            process::exit(1);
        }
    }
}
