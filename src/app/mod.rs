//! Application-level helpers used by the run orchestration.

pub mod statistics;

pub use statistics::print_error_statistics;
