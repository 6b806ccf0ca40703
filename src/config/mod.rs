//! Application configuration and constants.
//!
//! This module provides:
//! - Default paths and the store schema constants
//! - Configuration types (`Config`, log options, exit-code policy)

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel};
