//! SVG attribute name mapping.
//!
//! React expects camelCase props for SVG presentation attributes. Well-known
//! multi-word and namespaced attributes are looked up in a fixed table; any
//! other hyphenated name falls back to a generic kebab-case to camelCase
//! conversion.

use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Known SVG attribute names and their React prop equivalents.
///
/// Shared by the root attribute emitter and the body transformer so both
/// rename the same attribute the same way.
pub const SVG_TO_REACT_ATTRS: &[(&str, &str)] = &[
    ("class", "className"),
    ("clip-path", "clipPath"),
    ("clip-rule", "clipRule"),
    ("fill-opacity", "fillOpacity"),
    ("fill-rule", "fillRule"),
    ("stroke-dasharray", "strokeDasharray"),
    ("stroke-dashoffset", "strokeDashoffset"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("stroke-miterlimit", "strokeMiterlimit"),
    ("stroke-opacity", "strokeOpacity"),
    ("stroke-width", "strokeWidth"),
    ("text-anchor", "textAnchor"),
    ("font-family", "fontFamily"),
    ("font-size", "fontSize"),
    ("font-weight", "fontWeight"),
    ("xlink:href", "xlinkHref"),
    ("xml:space", "xmlSpace"),
    ("stop-color", "stopColor"),
    ("stop-opacity", "stopOpacity"),
    ("color-interpolation", "colorInterpolation"),
    ("color-rendering", "colorRendering"),
    ("enable-background", "enableBackground"),
    ("dominant-baseline", "dominantBaseline"),
    ("shape-rendering", "shapeRendering"),
    ("text-decoration", "textDecoration"),
    ("vector-effect", "vectorEffect"),
];

static ATTR_INDEX: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| SVG_TO_REACT_ATTRS.iter().copied().collect());

/// Returns the React name for an attribute listed in the mapping table.
pub fn lookup(name: &str) -> Option<&'static str> {
    ATTR_INDEX.get(name).copied()
}

/// Iterates over the mapping table in declaration order.
pub fn known_attributes() -> impl Iterator<Item = (&'static str, &'static str)> {
    SVG_TO_REACT_ATTRS.iter().copied()
}

/// Maps an SVG attribute name to its React prop name.
///
/// - Table entries map exactly (case-sensitive).
/// - Other names containing a hyphen are converted with [`kebab_to_camel`].
/// - Everything else, including `viewBox`, is returned unchanged.
pub fn map_attribute_name(name: &str) -> Cow<'_, str> {
    if let Some(mapped) = lookup(name) {
        return Cow::Borrowed(mapped);
    }

    if name != "viewBox" && name.contains('-') {
        return Cow::Owned(kebab_to_camel(name));
    }

    Cow::Borrowed(name)
}

/// Converts a kebab-case name to camelCase.
///
/// The first segment is kept as-is; each following non-empty segment gets
/// its first character uppercased. Empty segments (from doubled or trailing
/// hyphens) are dropped.
pub fn kebab_to_camel(name: &str) -> String {
    let mut segments = name.split('-');
    let mut result = String::with_capacity(name.len());
    result.push_str(segments.next().unwrap_or_default());

    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}
