//! Node store access.
//!
//! This module provides:
//! - Read-only opening of the crawler's SQLite store
//! - Decoding of `nodes` rows into `StoredNode`
//! - A lazy stream over all stored nodes

mod nodes;
mod pool;

pub use nodes::{stream_nodes, StoredNode};
pub use pool::open_store;
