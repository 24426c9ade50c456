//! Attribute list parsing.

use crate::names::map_attribute_name;
use indexmap::IndexMap;
use regex::bytes::Regex;
use std::sync::LazyLock;

// `(?-u)` lets the value classes match any byte, so non-UTF-8 values survive.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?-u)([a-zA-Z0-9_:-]+)\s*=\s*("[^"]*"|'[^']*')"#)
        .expect("valid attribute regex")
});

/// Parsed attributes keyed by their React name.
///
/// Values are the quoted literals from the source, quotes included, as raw
/// bytes. Keys keep the position of their first occurrence; a later
/// duplicate replaces the value only.
pub type Attributes = IndexMap<String, Vec<u8>>;

/// Extracts `name="value"` / `name='value'` pairs from the text between a
/// tag name and its closing `>`.
///
/// Names are passed through [`map_attribute_name`]. Unquoted values are not
/// recognized. Text without any attribute yields an empty map.
pub fn parse_attributes(text: impl AsRef<[u8]>) -> Attributes {
    let mut attrs = Attributes::new();

    for caps in ATTRIBUTE.captures_iter(text.as_ref()) {
        // Names only ever contain ASCII, so this never replaces anything.
        let source_name = String::from_utf8_lossy(&caps[1]);
        let name = map_attribute_name(&source_name).into_owned();
        attrs.insert(name, caps[2].to_vec());
    }

    attrs
}
