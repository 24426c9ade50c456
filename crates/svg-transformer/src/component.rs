//! React component boilerplate around the converted markup.

/// Component name used when the caller does not pick one.
pub const DEFAULT_COMPONENT_NAME: &str = "SvgIcon";

/// Indentation of the `<svg>` element inside the component body.
pub(crate) const ELEMENT_INDENT: &str = "  ";

/// Indentation of root attributes and body lines.
pub(crate) const CHILD_INDENT: &str = "    ";

/// The fixed parts of a generated component file.
#[derive(Debug, Clone)]
pub struct ComponentWrapper<'a> {
    name: &'a str,
}

impl<'a> ComponentWrapper<'a> {
    /// Creates a wrapper for the component called `name`.
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// The component name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// The import statement the file starts with, followed by a blank line.
    pub fn preamble(&self) -> &'static str {
        "import * as React from \"react\";\n\n"
    }

    /// The typed component declaration opening the JSX expression.
    ///
    /// Produces output like:
    /// ```text
    /// const Icon: React.FC<React.SVGProps<SVGElement>> = (props) => (
    /// ```
    pub fn declaration(&self) -> String {
        format!(
            "const {}: React.FC<React.SVGProps<SVGElement>> = (props) => (\n",
            self.name
        )
    }

    /// Start of the root element; attributes follow on their own lines.
    pub fn element_open(&self) -> String {
        format!("{}<svg\n", ELEMENT_INDENT)
    }

    /// Closes the root element's opening tag after the attributes.
    pub fn element_open_end(&self) -> String {
        format!("{}>\n", ELEMENT_INDENT)
    }

    /// Closes the root element.
    pub fn element_close(&self) -> String {
        format!("{}</svg>\n", ELEMENT_INDENT)
    }

    /// Ends the declaration and exports the memoized component.
    ///
    /// Produces output like:
    /// ```text
    /// );
    ///
    /// export default React.memo(Icon);
    /// ```
    pub fn footer(&self) -> String {
        format!(");\n\nexport default React.memo({});\n", self.name)
    }
}

impl Default for ComponentWrapper<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_COMPONENT_NAME)
    }
}
