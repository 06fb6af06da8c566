//! Search options and configuration.

/// Options for locating tag pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Which characters may follow the tag name in an open tag
    pub boundary: BoundaryRule,

    /// Match tag names regardless of ASCII case
    pub case_insensitive: bool,

    /// Maximum same-name nesting depth (None = unlimited).
    ///
    /// The outermost pair is depth 1; a limit of 0 is raised to 1.
    pub max_depth: Option<usize>,
}

impl SearchOptions {
    /// Create new search options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the open-tag boundary rule.
    pub fn with_boundary(mut self, boundary: BoundaryRule) -> Self {
        self.boundary = boundary;
        self
    }

    /// Use the HTML boundary rule (whitespace, `/` or `>` after the name).
    pub fn strict_boundary(mut self) -> Self {
        self.boundary = BoundaryRule::Html;
        self
    }

    /// Enable or disable case-insensitive tag names.
    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Match tag names regardless of ASCII case.
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Limit same-name nesting depth.
    ///
    /// A depth of 1 allows a pair with no same-name pair inside it. 0 is
    /// treated as 1, since no search could succeed otherwise.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth.max(1));
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            boundary: BoundaryRule::Compatible,
            case_insensitive: false,
            max_depth: None,
        }
    }
}

/// Characters accepted right after the tag name of an open tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryRule {
    /// Space, comma or `>` (matches the historical scraper behavior)
    #[default]
    Compatible,
    /// Any ASCII whitespace, `/` or `>`
    Html,
}

impl BoundaryRule {
    /// Regex character class for the boundary.
    pub(crate) fn class(self) -> &'static str {
        match self {
            BoundaryRule::Compatible => "[ ,>]",
            BoundaryRule::Html => r"[\t\n\x0C\r />]",
        }
    }
}

/// Error handling mode during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any inconsistency
    #[default]
    Strict,
    /// Keep what can be extracted and log a warning
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_options_builder() {
        let options = SearchOptions::new()
            .strict_boundary()
            .case_insensitive()
            .with_max_depth(8);

        assert_eq!(options.boundary, BoundaryRule::Html);
        assert!(options.case_insensitive);
        assert_eq!(options.max_depth, Some(8));
    }

    #[test]
    fn test_max_depth_zero_is_one() {
        let options = SearchOptions::new().with_max_depth(0);
        assert_eq!(options.max_depth, Some(1));
    }

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.boundary, BoundaryRule::Compatible);
        assert!(!options.case_insensitive);
        assert_eq!(options.max_depth, None);
        assert_eq!(ErrorMode::default(), ErrorMode::Strict);
    }
}
