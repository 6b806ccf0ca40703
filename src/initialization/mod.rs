//! Application initialization.
//!
//! The enrichment run opens its own resources (store, indexes) as owned values;
//! process-wide setup that has to happen before a run lives here.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
