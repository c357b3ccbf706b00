// src/lib.rs

//! Synergy overlap checker
//!
//! Detects package names published in both the EPEL community repository
//! and the AlmaLinux Synergy repository for each supported release version.
//!
//! # Architecture
//!
//! - Repodata pipeline: repomd.xml locator -> primary.xml.gz fetcher -> name parser
//! - Best-effort: a failing repository address is logged and skipped, never fatal
//! - Strictly sequential: one blocking request at a time, no retries
//! - Configuration: built-in version/repository tables, overridable via TOML

pub mod config;
mod error;
pub mod repodata;
pub mod report;

pub use config::CheckConfig;
pub use error::{Error, Result};
pub use repodata::{PrimarySource, RepodataClient};
pub use report::{collect_packages, report_overlaps};
