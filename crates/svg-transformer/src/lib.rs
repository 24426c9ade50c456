//! SVG to React TSX transformation.
//!
//! This crate turns a single SVG document into the source of a React
//! function component. It handles:
//! - Locating the root `<svg>` element with simple pattern matching
//! - Renaming SVG attributes to React's camelCase props
//! - Re-emitting the root attributes and body inside a typed, memoized component
//!
//! # Example
//!
//! ```
//! use svg_transformer::{compose, transform, TransformOptions};
//!
//! let source = r#"<svg viewBox="0 0 24 24">
//!   <path stroke-width="2" d="M4 12h16"/>
//! </svg>"#;
//!
//! let tsx = compose(source, "MenuIcon");
//! assert!(tsx.contains(r#"<path strokeWidth="2" d="M4 12h16"/>"#));
//!
//! // Raw bytes work too, whatever the document's declared encoding.
//! let result = transform(
//!     b"<svg><title>caf\xE9</title></svg>",
//!     &TransformOptions {
//!         component_name: "Cafe".to_string(),
//!     },
//! );
//! assert_eq!(result.body_lines, 1);
//! ```

mod attributes;
mod body;
mod component;
mod names;
mod root;
mod transform;

pub use attributes::{parse_attributes, Attributes};
pub use body::{transform_body, transform_body_lines, transform_line};
pub use component::{ComponentWrapper, DEFAULT_COMPONENT_NAME};
pub use names::{kebab_to_camel, known_attributes, lookup, map_attribute_name, SVG_TO_REACT_ATTRS};
pub use root::{emit_root_attributes, PROPS_SPREAD, XMLNS_DECLARATION};
pub use transform::{compose, transform, SvgRoot, TransformOptions, TransformResult};
