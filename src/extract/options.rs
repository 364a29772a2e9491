//! Extraction thresholds.

/// Thresholds used by the heading and snippet extractors.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Minimum character count of a trimmed heading
    pub min_heading_chars: usize,

    /// Minimum effective font size of a heading, in points
    pub min_heading_font_size: f32,

    /// A page yields a snippet only when its text is longer than this
    pub min_snippet_chars: usize,

    /// Maximum whitespace-delimited tokens kept in a snippet
    pub max_snippet_tokens: usize,
}

impl ExtractOptions {
    /// Create extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum heading length.
    pub fn with_min_heading_chars(mut self, chars: usize) -> Self {
        self.min_heading_chars = chars;
        self
    }

    /// Set minimum heading font size.
    pub fn with_min_heading_font_size(mut self, size: f32) -> Self {
        self.min_heading_font_size = size;
        self
    }

    /// Set the page length a snippet must exceed.
    pub fn with_min_snippet_chars(mut self, chars: usize) -> Self {
        self.min_snippet_chars = chars;
        self
    }

    /// Set the snippet token cap.
    pub fn with_max_snippet_tokens(mut self, tokens: usize) -> Self {
        self.max_snippet_tokens = tokens;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_heading_chars: 10,
            min_heading_font_size: 12.0,
            min_snippet_chars: 300,
            max_snippet_tokens: 100,
        }
    }
}
