// src/config.rs

//! Check configuration
//!
//! Version and repository-address tables for the two repository families.
//! The built-in defaults cover the currently supported release versions;
//! a TOML file with the same shape can replace them for testing or when a
//! new release branches:
//!
//! ```toml
//! versions = ["8", "9"]
//!
//! [epel]
//! 8 = ["https://dl.fedoraproject.org/pub/epel/8/Everything/x86_64/"]
//!
//! [synergy]
//! 8 = ["https://repo.almalinux.org/almalinux/8.9/synergy/x86_64/os/"]
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Repository tables for one run of the checker
///
/// For every entry in `versions`, both families must list a group of
/// repository base addresses (one per architecture). The tables are
/// immutable once loaded and passed explicitly into the reporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Release versions to check, in order
    pub versions: Vec<String>,

    /// EPEL repository groups, keyed by release version
    pub epel: BTreeMap<String, Vec<String>>,

    /// Synergy repository groups, keyed by release version
    pub synergy: BTreeMap<String, Vec<String>>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        let mut epel = BTreeMap::new();
        epel.insert(
            "8".to_string(),
            vec![
                "https://dl.fedoraproject.org/pub/epel/8/Everything/x86_64/".to_string(),
                "https://dl.fedoraproject.org/pub/epel/8/Everything/aarch64/".to_string(),
            ],
        );
        epel.insert(
            "9".to_string(),
            vec![
                "https://dl.fedoraproject.org/pub/epel/9/Everything/x86_64/".to_string(),
                "https://dl.fedoraproject.org/pub/epel/9/Everything/aarch64/".to_string(),
            ],
        );

        let mut synergy = BTreeMap::new();
        synergy.insert(
            "8".to_string(),
            vec![
                "https://repo.almalinux.org/almalinux/8.9/synergy/x86_64/os/".to_string(),
                "https://repo.almalinux.org/almalinux/8.9/synergy/aarch64/os/".to_string(),
            ],
        );
        synergy.insert(
            "9".to_string(),
            vec![
                "https://repo.almalinux.org/almalinux/9.3/synergy/x86_64/os/".to_string(),
                "https://repo.almalinux.org/almalinux/9.3/synergy/aarch64/os/".to_string(),
            ],
        );

        Self {
            versions: vec!["8".to_string(), "9".to_string()],
            epel,
            synergy,
        }
    }
}

impl CheckConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every version has a repository group in both families
    pub fn validate(&self) -> Result<()> {
        for version in &self.versions {
            if !self.epel.contains_key(version) {
                return Err(Error::Config(format!(
                    "No EPEL repositories configured for version {version}"
                )));
            }
            if !self.synergy.contains_key(version) {
                return Err(Error::Config(format!(
                    "No Synergy repositories configured for version {version}"
                )));
            }
        }
        Ok(())
    }

    /// Restrict the run to the given versions
    ///
    /// Errors if a requested version is not in the configured list.
    pub fn retain_versions(&mut self, keep: &[String]) -> Result<()> {
        for version in keep {
            if !self.versions.contains(version) {
                return Err(Error::Config(format!(
                    "Version {version} is not a supported version"
                )));
            }
        }
        self.versions.retain(|v| keep.contains(v));
        Ok(())
    }

    /// EPEL repository group for a version (empty if not configured)
    pub fn epel_group(&self, version: &str) -> &[String] {
        self.epel.get(version).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Synergy repository group for a version (empty if not configured)
    pub fn synergy_group(&self, version: &str) -> &[String] {
        self.synergy.get(version).map(Vec::as_slice).unwrap_or(&[])
    }
}
