//! Structural properties of the conversion that hold for any input.

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use svg_transformer::{
    compose, emit_root_attributes, known_attributes, map_attribute_name, transform_body,
    PROPS_SPREAD, XMLNS_DECLARATION,
};

/// Lines of the generated root element, between `<svg` and `>`.
fn root_block(output: &str) -> Vec<&str> {
    output
        .lines()
        .skip_while(|line| line.trim() != "<svg")
        .skip(1)
        .take_while(|line| line.trim() != ">")
        .map(str::trim)
        .collect()
}

/// Lines of the generated body, between `>` and `</svg>`.
fn body_block(output: &str) -> Vec<&str> {
    output
        .lines()
        .skip_while(|line| line.trim() != ">")
        .skip(1)
        .take_while(|line| line.trim() != "</svg>")
        .collect()
}

#[test]
fn every_root_attribute_appears_once_under_its_mapped_name() {
    let attrs = [
        ("viewBox", r#""0 0 32 32""#),
        ("fill-opacity", "'0.4'"),
        ("xml:space", r#""preserve""#),
        ("aria-labelledby", r#""title desc""#),
        ("role", r#""img""#),
    ];
    let attr_text: String = attrs
        .iter()
        .map(|(name, value)| format!(" {}={}", name, value))
        .collect();
    let source = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg"{}><rect/></svg>"#,
        attr_text
    );

    let output = compose(&source, "Icon");
    let root = root_block(&output);

    assert_eq!(root.first(), Some(&XMLNS_DECLARATION));
    assert_eq!(root.last(), Some(&PROPS_SPREAD));

    let emitted: HashSet<String> = root[1..root.len() - 1]
        .iter()
        .map(|line| line.to_string())
        .collect();
    let expected: HashSet<String> = attrs
        .iter()
        .map(|(name, value)| format!("{}={}", map_attribute_name(name), value))
        .collect();
    assert_eq!(emitted, expected);
    assert_eq!(root.len(), attrs.len() + 2);
}

#[test]
fn empty_root_yields_namespace_and_spread_only() {
    let output = compose("<svg><path/></svg>", "Icon");
    assert_eq!(root_block(&output), vec![XMLNS_DECLARATION, PROPS_SPREAD]);
    assert_eq!(
        emit_root_attributes(""),
        vec![XMLNS_DECLARATION.as_bytes().to_vec(), PROPS_SPREAD.as_bytes().to_vec()]
    );
}

#[test]
fn blank_lines_are_eliminated() {
    let non_blank = ["<g>", "<path d=\"M1 1\"/>", "<circle r=\"2\"/>", "</g>"];
    let mut body = String::new();
    for (i, line) in non_blank.iter().enumerate() {
        body.push_str(line);
        body.push('\n');
        // Interleave a varying number of blank and whitespace-only lines.
        for _ in 0..i {
            body.push_str("   \n\n\t\n");
        }
    }

    let transformed = transform_body(&body);
    assert_eq!(transformed.split(|&b| b == b'\n').count(), non_blank.len());

    let output = compose(&format!("<svg>\n{}</svg>", body), "Icon");
    let lines = body_block(&output);
    assert_eq!(lines.len(), non_blank.len());
    assert!(lines.iter().all(|line| line.starts_with("    ")));
}

#[test]
fn body_and_root_share_one_mapping_table() {
    for (svg, react) in known_attributes() {
        let source = format!(r#"<svg {svg}="1"><g {svg}="2"/></svg>"#);
        let output = compose(&source, "Icon");

        assert!(
            root_block(&output).contains(&format!(r#"{react}="1""#).as_str()),
            "root rename for {svg}:\n{output}"
        );
        assert_eq!(
            body_block(&output),
            vec![format!(r#"    <g {react}="2"/>"#)],
            "body rename for {svg}"
        );
    }
}

#[test]
fn unknown_kebab_attribute_converted_in_root_and_body() {
    let output = compose(
        r#"<svg data-custom-value="a"><g data-custom-value="b"/></svg>"#,
        "Icon",
    );
    assert!(root_block(&output).contains(&r#"dataCustomValue="a""#));
    assert_eq!(body_block(&output), vec![r#"    <g dataCustomValue="b"/>"#]);
}

#[test]
fn component_name_used_in_declaration_and_export() {
    let output = compose(r#"<svg viewBox="0 0 24 24"></svg>"#, "ArrowLeft");
    assert!(output.starts_with("import * as React from \"react\";\n\n"));
    assert!(output.contains("const ArrowLeft: React.FC<React.SVGProps<SVGElement>> = (props) => ("));
    assert!(output.ends_with("export default React.memo(ArrowLeft);\n"));
}
