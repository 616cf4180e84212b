//! `<loc>` extraction from sitemap XML.
//!
//! The inputs are self-produced artifacts with a fixed shape, so this
//! scans events and collects element text rather than building a document
//! tree. Only `<loc>` matters here; everything else is skipped. Text and
//! entity-reference events between the `<loc>` tags are joined into one
//! location string.

use anyhow::{Result, bail};
use quick_xml::Reader;
use quick_xml::events::Event;
use rustc_hash::FxHashSet;

/// Collect the text content of every `<loc>` element as a set of raw
/// location strings (absolute URLs or absolute paths).
pub fn extract_locations(text: &str) -> Result<FxHashSet<String>> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut locations = FxHashSet::default();
    // Accumulates fragments while inside a <loc> element
    let mut current: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) if e.local_name().as_ref() == b"loc" => {
                current = Some(String::new());
            }
            Event::End(ref e) if e.local_name().as_ref() == b"loc" => {
                if let Some(loc) = current.take() {
                    if !loc.is_empty() {
                        locations.insert(loc);
                    }
                }
            }
            Event::Text(e) => {
                if let Some(loc) = current.as_mut() {
                    loc.push_str(&e.decode()?);
                }
            }
            Event::GeneralRef(e) => {
                if let Some(loc) = current.as_mut() {
                    if let Some(ch) = e.resolve_char_ref()? {
                        loc.push(ch);
                    } else {
                        let name = e.decode()?;
                        match predefined_entity(&name) {
                            Some(resolved) => loc.push_str(resolved),
                            None => bail!("unresolved entity reference &{name};"),
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(locations)
}

/// The five predefined XML entities; anything else is undeclared here.
fn predefined_entity(name: &str) -> Option<&'static str> {
    match name {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "apos" => Some("'"),
        "quot" => Some("\""),
        _ => None,
    }
}
