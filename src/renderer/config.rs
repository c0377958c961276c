//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SvgConfig {
    /// Whether to declare the SVG namespace on the root element
    pub namespace: bool,

    /// Whether to indent figure elements
    pub pretty_print: bool,
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the root element carries `xmlns`
    pub fn with_namespace(mut self, namespace: bool) -> Self {
        self.namespace = namespace;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
