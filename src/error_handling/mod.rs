//! Error handling and processing statistics.
//!
//! This module provides:
//! - Fatal error types for the store, the lookup indexes, and the output artifact
//! - Per-record error/warning/info categories
//! - Processing statistics tracking
//!
//! Per-record categories are split into:
//! - **Errors**: records skipped entirely (unparseable IP address)
//! - **Warnings**: records emitted with empty lookup fields (misses, malformed records)
//! - **Info**: informational metrics

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{
    ErrorType, GeoIpError, InfoType, InitializationError, OutputError, StoreError, WarningType,
};
