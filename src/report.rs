// src/report.rs

//! Package collection and overlap reporting
//!
//! Drives the repodata pipeline over each configured repository group and
//! reports package names present in both the EPEL and Synergy families for
//! a release version. A failing repository address is logged and skipped;
//! missing data narrows the comparison but never aborts the run.

use crate::config::CheckConfig;
use crate::error::Result;
use crate::repodata::{parse_package_names, PrimarySource};
use std::collections::BTreeSet;
use std::io::Write;
use tracing::{debug, error, info, warn};

/// Collect package names from every address in a repository group
///
/// Addresses are processed in order and their name lists concatenated.
/// No deduplication happens here; the reporter applies set semantics.
pub fn collect_packages(source: &dyn PrimarySource, group: &[String]) -> Vec<String> {
    let mut all = Vec::new();

    for base in group {
        debug!("Getting metadata from {}", base);

        let href = match source.locate_primary(base) {
            Ok(Some(href)) => href,
            Ok(None) => {
                warn!("No primary metadata entry in repomd.xml for {}", base);
                continue;
            }
            Err(e) => {
                error!("Error fetching repomd.xml from {}: {}", base, e);
                continue;
            }
        };

        let data = match source.fetch_primary(base, &href) {
            Ok(data) => data,
            Err(e) => {
                error!("Error downloading primary file from {}: {}", base, e);
                continue;
            }
        };

        match parse_package_names(&data) {
            Ok(mut names) => {
                debug!("Found {} package entries at {}", names.len(), base);
                all.append(&mut names);
            }
            Err(e) => error!("Error parsing primary file from {}: {}", base, e),
        }
    }

    all
}

/// Report package names present in both families, per release version
///
/// Writes one line per overlapping name, or a single "no packages found"
/// line when every version's families are disjoint. Names are reported in
/// sorted order within a version. Returns whether any overlap was found.
pub fn report_overlaps<W: Write>(
    source: &dyn PrimarySource,
    config: &CheckConfig,
    out: &mut W,
) -> Result<bool> {
    let mut found = false;

    for version in &config.versions {
        info!("Checking version {}", version);

        let epel: BTreeSet<String> = collect_packages(source, config.epel_group(version))
            .into_iter()
            .collect();
        let synergy: BTreeSet<String> = collect_packages(source, config.synergy_group(version))
            .into_iter()
            .collect();

        for package in epel.intersection(&synergy) {
            found = true;
            writeln!(
                out,
                "Package exists in both EPEL and Synergy for version {version}: {package}"
            )?;
        }
    }

    if !found {
        writeln!(out, "No packages found in both EPEL and Synergy repos")?;
    }

    Ok(found)
}
