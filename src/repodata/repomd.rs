// src/repodata/repomd.rs

//! repomd.xml parsing
//!
//! The repomd document is the index-of-indexes for an RPM repository: its
//! `data` children describe the detailed metadata files, and the entry with
//! `type="primary"` carries a `location` child whose `href` is the relative
//! path to the full package list.

use crate::error::Result;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Read one attribute value from an element, unescaped
///
/// Matching ignores any namespace prefix on the attribute key.
pub(crate) fn attr_value(element: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Extract the primary metadata location from a repomd.xml document
///
/// Returns the `href` of the `location` element nested under the `data`
/// entry whose `type` attribute is `"primary"`, or `None` when the document
/// has no such entry. Tag matching is on local names, so it is robust to
/// namespace prefix variation.
pub fn find_primary_href(xml: &[u8]) -> Result<Option<String>> {
    let mut reader = Reader::from_reader(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut in_primary = false;
    // Depth below the primary <data> element; 0 means direct children
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let local = e.local_name();
                if in_primary {
                    if local.as_ref() == b"location" {
                        if let Some(href) = attr_value(&e, b"href")? {
                            return Ok(Some(href));
                        }
                    }
                    depth += 1;
                } else if local.as_ref() == b"data"
                    && attr_value(&e, b"type")?.as_deref() == Some("primary")
                {
                    in_primary = true;
                    depth = 0;
                }
            }
            Event::Empty(e) => {
                // <location href="..."/> is normally self-closing
                if in_primary && e.local_name().as_ref() == b"location" {
                    if let Some(href) = attr_value(&e, b"href")? {
                        return Ok(Some(href));
                    }
                }
            }
            Event::End(_) => {
                if in_primary {
                    if depth == 0 {
                        in_primary = false;
                    } else {
                        depth -= 1;
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        buf.clear();
    }
}
