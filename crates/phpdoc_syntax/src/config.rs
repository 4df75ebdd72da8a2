//! Parser configuration.

/// Default bound on nested type productions.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting of type productions before parsing fails with `NestingTooDeep`
    pub max_depth: usize,
    /// Whether `Foo<p>` style HTML after an identifier is treated as description text rather than generics
    pub html_lookahead: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            html_lookahead: true,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable the HTML lookahead after identifiers
    pub fn with_html_lookahead(mut self, enabled: bool) -> Self {
        self.html_lookahead = enabled;
        self
    }
}
