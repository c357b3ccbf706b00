// src/repodata/primary.rs

//! Primary metadata parsing
//!
//! The primary metadata file lists every package in a repository. Each
//! `<package type="rpm">` element carries the package name in a direct
//! `name` child (namespaced under the metadata/common schema). Entries
//! with any other type attribute are skipped.

use crate::error::{Error, Result};
use crate::repodata::repomd::attr_value;
use flate2::read::GzDecoder;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::Read;

/// Decompress a gzip byte buffer to its raw contents
pub fn decompress_gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out).map_err(Error::Decompress)?;
    Ok(out)
}

/// Per-package scan state while walking the document
struct PackageScan {
    is_rpm: bool,
    // Depth below the <package> element; 0 means direct children
    depth: usize,
    in_name: bool,
    taken: bool,
}

/// Extract package names from decompressed primary.xml bytes
///
/// Returns one name per `<package type="rpm">` entry, in document order.
/// Only direct `name` children count, and the scan of a package stops at
/// the first one. Tag matching is on local names, so the metadata/common
/// namespace prefix is irrelevant.
pub fn parse_package_names(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(true);

    let mut names = Vec::new();
    let mut buf = Vec::new();
    let mut package: Option<PackageScan> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let local = e.local_name();
                match package.as_mut() {
                    Some(scan) => {
                        if scan.is_rpm
                            && !scan.taken
                            && scan.depth == 0
                            && local.as_ref() == b"name"
                        {
                            scan.in_name = true;
                        }
                        scan.depth += 1;
                    }
                    None => {
                        if local.as_ref() == b"package" {
                            let is_rpm = attr_value(&e, b"type")?.as_deref() == Some("rpm");
                            package = Some(PackageScan {
                                is_rpm,
                                depth: 0,
                                in_name: false,
                                taken: false,
                            });
                        }
                    }
                }
            }
            Event::Text(t) => {
                if let Some(scan) = package.as_mut() {
                    if scan.in_name {
                        names.push(t.unescape()?.into_owned());
                        scan.taken = true;
                        scan.in_name = false;
                    }
                }
            }
            Event::End(_) => {
                if let Some(scan) = package.as_mut() {
                    if scan.depth == 0 {
                        package = None;
                    } else {
                        scan.depth -= 1;
                        scan.in_name = false;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(names)
}
