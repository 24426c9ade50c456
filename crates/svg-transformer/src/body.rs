//! Line-oriented rewriting of the markup inside the root `<svg>`.
//!
//! This is deliberately not a markup parser. Each line is trimmed and its
//! attribute names are rewritten in place by pattern matching:
//!
//! 1. Every table entry from [`crate::names`] is renamed where it appears as
//!    `name=` at the start of the line or after whitespace.
//! 2. Any remaining lowercase kebab-case `name=` token in the same position
//!    is converted to camelCase.
//!
//! Anchoring on whitespace means a longer token such as `not-stroke-width=`
//! is treated as a whole and never partially renamed.

use crate::names::{kebab_to_camel, known_attributes, lookup};
use regex::bytes::{Captures, Regex};
use std::sync::LazyLock;

struct KnownAttribute {
    pattern: Regex,
    replacement: Vec<u8>,
}

// Patterns run with `(?-u)`: `\s` is ASCII whitespace and lines that are not
// valid UTF-8 are still matched byte for byte.
static KNOWN_ATTRIBUTES: LazyLock<Vec<KnownAttribute>> = LazyLock::new(|| {
    known_attributes()
        .map(|(svg, react)| KnownAttribute {
            pattern: Regex::new(&format!(r"(?-u)(^|\s){}=", regex::escape(svg)))
                .expect("valid attribute rename regex"),
            replacement: format!("${{1}}{}=", react).into_bytes(),
        })
        .collect()
});

static KEBAB_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)(^|\s)([a-z]+-[a-z0-9-]+)=").expect("valid kebab attribute regex")
});

/// Rewrites attribute names in the body and drops blank lines.
///
/// Surviving lines are trimmed and joined with `\n`; no trailing newline.
pub fn transform_body(body: impl AsRef<[u8]>) -> Vec<u8> {
    transform_body_lines(body).join(&b'\n')
}

/// Like [`transform_body`], but returns the surviving lines.
pub fn transform_body_lines(body: impl AsRef<[u8]>) -> Vec<Vec<u8>> {
    body.as_ref()
        .split(|&byte| byte == b'\n')
        .map(<[u8]>::trim_ascii)
        .filter(|line| !line.is_empty())
        .map(transform_line)
        .collect()
}

/// Rewrites the attribute names found on a single, already trimmed line.
pub fn transform_line(line: impl AsRef<[u8]>) -> Vec<u8> {
    let mut line = line.as_ref().to_vec();

    for known in KNOWN_ATTRIBUTES.iter() {
        if known.pattern.is_match(&line) {
            line = known
                .pattern
                .replace_all(&line, known.replacement.as_slice())
                .into_owned();
        }
    }

    KEBAB_ATTRIBUTE
        .replace_all(&line, |caps: &Captures<'_>| {
            // The pattern only matches ASCII.
            let name = String::from_utf8_lossy(&caps[2]);
            if lookup(&name).is_some() {
                return caps[0].to_vec();
            }
            [&caps[1], kebab_to_camel(&name).as_bytes(), b"=".as_slice()].concat()
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(input: &str) -> String {
        String::from_utf8(transform_line(input)).unwrap()
    }

    fn body(input: &str) -> String {
        String::from_utf8(transform_body(input)).unwrap()
    }

    #[test]
    fn test_known_attributes_renamed() {
        assert_eq!(
            line(r#"<path stroke-width="2" fill-rule="evenodd"/>"#),
            r#"<path strokeWidth="2" fillRule="evenodd"/>"#
        );
    }

    #[test]
    fn test_namespaced_attributes_renamed() {
        assert_eq!(
            line(r##"<use xlink:href="#icon" class="a"/>"##),
            r##"<use xlinkHref="#icon" className="a"/>"##
        );
    }

    #[test]
    fn test_generic_kebab_renamed() {
        assert_eq!(
            line(r#"<g data-custom-value="1" marker-end="url(#m)">"#),
            r#"<g dataCustomValue="1" markerEnd="url(#m)">"#
        );
    }

    #[test]
    fn test_whole_token_matching() {
        assert_eq!(body(r#"  not-stroke-width="x""#), r#"notStrokeWidth="x""#);
        assert_eq!(
            line(r#"<path mystroke-width="1" stroke-width="2"/>"#),
            r#"<path mystrokeWidth="1" strokeWidth="2"/>"#
        );
    }

    #[test]
    fn test_attribute_at_line_start() {
        assert_eq!(line(r#"stroke-linecap="round""#), r#"strokeLinecap="round""#);
    }

    #[test]
    fn test_values_untouched() {
        assert_eq!(
            line(r#"<text font-family="my-font=1">a-b=c</text>"#),
            r#"<text fontFamily="my-font=1">a-b=c</text>"#
        );
    }

    #[test]
    fn test_tab_separated_attributes() {
        assert_eq!(
            line("<path\tfill-opacity=\"0.5\"\tpaint-order=\"stroke\"/>"),
            "<path\tfillOpacity=\"0.5\"\tpaintOrder=\"stroke\"/>"
        );
    }

    #[test]
    fn test_line_without_attributes_unchanged() {
        assert_eq!(line("</g>"), "</g>");
        assert_eq!(line("<title>Icon</title>"), "<title>Icon</title>");
    }

    #[test]
    fn test_blank_lines_dropped() {
        let source = "\n  <g>\n\n   \n    <path d=\"M0 0\"/>\r\n\t\n  </g>\n";
        let lines = transform_body_lines(source);
        assert_eq!(
            lines,
            vec![b"<g>".to_vec(), b"<path d=\"M0 0\"/>".to_vec(), b"</g>".to_vec()]
        );
        assert_eq!(body(source), "<g>\n<path d=\"M0 0\"/>\n</g>");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(body(""), "");
        assert!(transform_body_lines("\n \n").is_empty());
    }

    #[test]
    fn test_non_utf8_line_rewritten_bytewise() {
        let source = b"<text stroke-width=\"1\" data-x-y=\"\xE9\">caf\xE9</text>\n\n";
        assert_eq!(
            transform_body(source),
            b"<text strokeWidth=\"1\" dataXY=\"\xE9\">caf\xE9</text>".to_vec()
        );
    }
}
