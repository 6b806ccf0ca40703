//! Error type definitions.
//!
//! This module defines the fatal error types for each stage of a run, plus the
//! per-record error, warning, and info categories counted in `ProcessingStats`.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for the node store.
///
/// Every variant is fatal for the run: the store schema is fixed infrastructure,
/// so a row that does not decode means the pipeline and the store disagree.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store file could not be opened (missing, unreadable, not a database).
    #[error("Failed to open node store {path}: {source}")]
    Open {
        /// Store path as given
        path: String,
        /// Underlying driver error
        #[source]
        source: sqlx::Error,
    },

    /// The select query failed (missing table, I/O error mid-iteration).
    #[error("Node store query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A row came back with the wrong number of columns.
    #[error("Node store row has {actual} columns, expected {expected}")]
    ColumnCount {
        /// Columns the reader decodes
        expected: usize,
        /// Columns the row carried
        actual: usize,
    },

    /// A column could not be coerced into its field type.
    #[error("Failed to decode column {column}: {reason}")]
    Decode {
        /// Column name
        column: &'static str,
        /// Driver or conversion message
        reason: String,
    },
}

/// Error types for GeoIP and ASN index handling.
#[derive(Error, Debug)]
pub enum GeoIpError {
    /// The index file could not be read from disk.
    #[error("Failed to read index file {path}: {source}")]
    Read {
        /// Index path as given
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The index file is not a valid MaxMind DB.
    #[error("Invalid index file {path}: {source}")]
    InvalidDatabase {
        /// Index path as given
        path: String,
        /// Reader error
        #[source]
        source: maxminddb::MaxMindDbError,
    },

    /// The caller passed a string that is not an IPv4 or IPv6 address.
    #[error("Invalid IP address: {0:?}")]
    InvalidAddress(String),
}

/// Error types for writing the output artifact.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The destination (or its temp file) could not be created.
    #[error("Failed to create output file {path}: {source}")]
    Create {
        /// Destination path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or the buffered write failed.
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    /// Flushing, syncing, or renaming into place failed.
    #[error("Failed to persist output file {path}: {source}")]
    Persist {
        /// Destination path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Per-record errors. Each one skips the record without aborting the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// The stored IP field is empty or not an address
    InvalidIpAddress,
}

/// Per-record warnings. The record is still emitted with empty/zero fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    /// Geo index has no entry for the address
    GeoNotFound,
    /// Geo record present but not in the expected shape
    GeoRecordMalformed,
    /// Geo index rejected the lookup
    GeoLookupFailed,
    /// ASN index has no entry, or the entry has no organization
    AsnNotFound,
    /// ASN record present but not in the expected shape
    AsnRecordMalformed,
    /// ASN index rejected the lookup
    AsnLookupFailed,
}

/// Informational per-record metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    /// Record made it into the output
    NodeEnriched,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidIpAddress => "Invalid IP address (record skipped)",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::GeoNotFound => "No GeoIP entry",
            WarningType::GeoRecordMalformed => "Malformed GeoIP record",
            WarningType::GeoLookupFailed => "GeoIP lookup failed",
            WarningType::AsnNotFound => "No ASN entry",
            WarningType::AsnRecordMalformed => "Malformed ASN record",
            WarningType::AsnLookupFailed => "ASN lookup failed",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::NodeEnriched => "Nodes enriched",
        }
    }
}
