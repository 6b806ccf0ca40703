//! node_enrich library: GeoIP/ASN enrichment of crawled nodes
//!
//! This library reads the node inventory written by the crawler (a SQLite
//! store), resolves every node's IP address through a MaxMind City index and a
//! MaxMind ASN index, and writes the result as a JSON array for the map page.
//!
//! # Example
//!
//! ```no_run
//! use node_enrich::{run_enrichment, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     store_path: PathBuf::from("crawler.db"),
//!     output_path: PathBuf::from("html/nodes.json"),
//!     ..Default::default()
//! };
//!
//! let report = run_enrichment(&config).await?;
//! println!("Enriched {} of {} nodes", report.enriched, report.total_nodes);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime (the store driver is async).

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod enrich;
mod error_handling;
pub mod export;
pub mod geoip;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use error_handling::{
    ErrorType, GeoIpError, InfoType, InitializationError, OutputError, ProcessingStats,
    StoreError, WarningType,
};
pub use run::{run_enrichment, EnrichReport};

// Internal run module (owns the run's resources and drives the pipeline)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::PathBuf;
    use std::time::Instant;

    use sqlx::SqlitePool;

    use crate::app::print_error_statistics;
    use crate::config::Config;
    use crate::enrich::{enrich_nodes, EnrichedBatch};
    use crate::error_handling::ProcessingStats;
    use crate::export::write_nodes_json;
    use crate::geoip::{AsnResolver, GeoResolver};
    use crate::storage::{open_store, stream_nodes};

    /// Results of an enrichment run.
    #[derive(Debug, Clone)]
    pub struct EnrichReport {
        /// Stored nodes read
        pub total_nodes: usize,
        /// Records written to the artifact
        pub enriched: usize,
        /// Nodes dropped for an unparseable IP address
        pub skipped: usize,
        /// Lookup misses, malformed records and rejected lookups
        pub lookup_warnings: usize,
        /// Where the artifact was written
        pub output_path: PathBuf,
        /// Build versions of the geo and ASN indexes used
        pub index_versions: (String, String),
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one enrichment pass with the provided configuration.
    ///
    /// Opens the store, then both indexes; streams every stored node through
    /// the pipeline; writes the artifact. The store is closed on every path
    /// once it has been opened, and the indexes are released when this
    /// function returns.
    ///
    /// # Errors
    ///
    /// Fails, without touching the artifact, if:
    /// - The store cannot be opened or read, or a row does not decode
    /// - Either index is missing or corrupt
    ///
    /// Fails if the artifact cannot be written; a previous artifact is then
    /// left as it was.
    ///
    /// Records with unparseable IP addresses and lookup misses never fail the
    /// run; they are counted in the report.
    pub async fn run_enrichment(config: &Config) -> Result<EnrichReport> {
        let start_time = Instant::now();
        let stats = ProcessingStats::new();

        let pool = open_store(&config.store_path)
            .await
            .context("Failed to open node store")?;
        let result = enrich_store(&pool, config, &stats).await;
        pool.close().await;
        let (batch, index_versions) = result?;

        info!(
            "Enriched {} of {} stored nodes ({} skipped)",
            batch.nodes.len(),
            batch.total_nodes,
            batch.skipped()
        );

        write_nodes_json(&config.output_path, &batch.nodes)
            .context("Failed to write output artifact")?;

        print_error_statistics(&stats);

        Ok(EnrichReport {
            total_nodes: batch.total_nodes,
            enriched: batch.nodes.len(),
            skipped: batch.skipped(),
            lookup_warnings: stats.total_warnings(),
            output_path: config.output_path.clone(),
            index_versions,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }

    /// Opens both indexes and enriches every node in the open store.
    async fn enrich_store(
        pool: &SqlitePool,
        config: &Config,
        stats: &ProcessingStats,
    ) -> Result<(EnrichedBatch, (String, String))> {
        let geo = GeoResolver::open(&config.geo_db_path)
            .await
            .context("Failed to open GeoIP City index")?;
        let asn = AsnResolver::open(&config.asn_db_path)
            .await
            .context("Failed to open ASN index")?;

        let batch = enrich_nodes(stream_nodes(pool), &geo, &asn, stats)
            .await
            .context("Failed to read node store")?;

        let index_versions = (
            geo.metadata().version.clone(),
            asn.metadata().version.clone(),
        );
        Ok((batch, index_versions))
    }

}
