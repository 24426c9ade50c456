//! Root `<svg>` attribute emission.

use crate::attributes::parse_attributes;

/// The namespace declaration every generated root element starts with.
pub const XMLNS_DECLARATION: &str = r#"xmlns="http://www.w3.org/2000/svg""#;

/// Forwards the component's props onto the rendered `<svg>`.
pub const PROPS_SPREAD: &str = "{...props}";

/// Builds the attribute lines of the generated root element.
///
/// The namespace line always comes first and the props spread always last.
/// In between is every attribute parsed from `attr_text`, renamed for React,
/// in source order. A source `xmlns` is dropped since the namespace line
/// already covers it. Lines carry no indentation.
pub fn emit_root_attributes(attr_text: impl AsRef<[u8]>) -> Vec<Vec<u8>> {
    let attrs = parse_attributes(attr_text);

    let mut lines = Vec::with_capacity(attrs.len() + 2);
    lines.push(XMLNS_DECLARATION.as_bytes().to_vec());
    lines.extend(
        attrs
            .iter()
            .filter(|(name, _)| name.as_str() != "xmlns")
            .map(|(name, value)| [name.as_bytes(), b"=".as_slice(), value.as_slice()].concat()),
    );
    lines.push(PROPS_SPREAD.as_bytes().to_vec());
    lines
}
