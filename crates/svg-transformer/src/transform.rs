//! Main transformation logic.

use crate::body::transform_body_lines;
use crate::component::{ComponentWrapper, CHILD_INDENT, DEFAULT_COMPONENT_NAME};
use crate::root::emit_root_attributes;
use regex::bytes::Regex;
use std::sync::LazyLock;

static SVG_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)<svg[^>]*>([\s\S]*?)</svg>").expect("valid svg element regex")
});
static SVG_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)<svg([^>]*)>").expect("valid svg open tag regex"));

/// The parts of the source document taken from its root `<svg>` element.
///
/// Only the first match is used. Anything that cannot be located is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SvgRoot<'a> {
    /// Text between `<svg` and the first `>`.
    pub attributes: &'a [u8],
    /// Text between the opening tag and the nearest `</svg>`.
    pub body: &'a [u8],
    /// Whether an opening `<svg` tag was found at all.
    pub found: bool,
}

impl<'a> SvgRoot<'a> {
    /// Locates the root element in `source`.
    pub fn locate(source: &'a [u8]) -> Self {
        let body = SVG_ELEMENT
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map_or(&[][..], |m| m.as_bytes());
        let open_tag = SVG_OPEN_TAG.captures(source).and_then(|caps| caps.get(1));

        Self {
            attributes: open_tag.map_or(&[][..], |m| m.as_bytes()),
            body,
            found: open_tag.is_some(),
        }
    }
}

/// Options for transformation.
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Name of the generated React component.
    pub component_name: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
        }
    }
}

/// The result of transformation.
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// The generated TSX code. Bytes the conversion does not touch are
    /// copied from the source as-is, so this is UTF-8 only if the source was.
    pub tsx_code: Vec<u8>,
    /// Number of attributes copied from the source root element.
    pub root_attributes: usize,
    /// Number of body lines emitted.
    pub body_lines: usize,
}

/// Converts an SVG document into a React TSX component.
///
/// The source is matched as raw bytes, so documents in any ASCII-compatible
/// encoding convert without being decoded first.
///
/// Never fails: a document without a recognizable `<svg>` root still yields
/// a component, just with no copied attributes and an empty body.
pub fn transform(source: impl AsRef<[u8]>, options: &TransformOptions) -> TransformResult {
    let source = source.as_ref();
    let root = SvgRoot::locate(source);
    if !root.found {
        tracing::debug!("no <svg> root element found, emitting an empty component");
    }

    let wrapper = ComponentWrapper::new(&options.component_name);
    let root_lines = emit_root_attributes(root.attributes);
    let body_lines = transform_body_lines(root.body);
    // Namespace and props spread lines are always present.
    let root_attributes = root_lines.len() - 2;

    let mut output = Vec::with_capacity(source.len() + 256);
    output.extend_from_slice(wrapper.preamble().as_bytes());
    output.extend_from_slice(wrapper.declaration().as_bytes());
    output.extend_from_slice(wrapper.element_open().as_bytes());
    for line in &root_lines {
        push_indented(&mut output, line);
    }
    output.extend_from_slice(wrapper.element_open_end().as_bytes());
    for line in &body_lines {
        push_indented(&mut output, line);
    }
    output.extend_from_slice(wrapper.element_close().as_bytes());
    output.extend_from_slice(wrapper.footer().as_bytes());

    tracing::debug!(
        component = wrapper.name(),
        root_attributes,
        body_lines = body_lines.len(),
        "transformed svg document"
    );

    TransformResult {
        tsx_code: output,
        root_attributes,
        body_lines: body_lines.len(),
    }
}

/// Converts an SVG document into the source of a component named
/// `component_name`.
pub fn compose(source: &str, component_name: &str) -> String {
    let tsx_code = transform(
        source,
        &TransformOptions {
            component_name: component_name.to_string(),
        },
    )
    .tsx_code;
    // UTF-8 in, UTF-8 out: only ASCII is inserted or replaced.
    String::from_utf8(tsx_code)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

fn push_indented(output: &mut Vec<u8>, line: &[u8]) {
    output.extend_from_slice(CHILD_INDENT.as_bytes());
    output.extend_from_slice(line);
    output.push(b'\n');
}
