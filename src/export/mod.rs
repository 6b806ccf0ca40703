//! Output artifact export.
//!
//! This module serializes enriched nodes into the JSON artifact consumed by
//! the map page.

mod json;

pub use json::write_nodes_json;
