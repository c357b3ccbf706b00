// src/repodata/mod.rs

//! RPM repository metadata retrieval and parsing
//!
//! This module provides the fetch pipeline for one repository address:
//! - Locating the primary metadata file through `repodata/repomd.xml`
//! - Fetching and gzip-decompressing the primary package list
//! - Extracting package names from the primary XML

mod client;
mod primary;
mod repomd;

pub use client::{RepodataClient, DEFAULT_HTTP_TIMEOUT, REPOMD_PATH};
pub use primary::{decompress_gzip, parse_package_names};
pub use repomd::find_primary_href;

use crate::error::Result;

/// Source of primary package metadata for a repository address
///
/// The network-facing half of the fetch pipeline. Implemented by
/// [`RepodataClient`] for real repositories; tests substitute in-memory
/// sources to exercise the aggregation and reporting logic offline.
pub trait PrimarySource {
    /// Locate the primary metadata file for a repository base address
    ///
    /// Returns the relative `href` from repomd.xml, or `None` when the
    /// repomd document has no primary entry.
    fn locate_primary(&self, base: &str) -> Result<Option<String>>;

    /// Fetch the primary metadata file and return its decompressed bytes
    fn fetch_primary(&self, base: &str, href: &str) -> Result<Vec<u8>>;
}
