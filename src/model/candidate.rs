//! Heading and snippet candidates.

/// A span that looks like a section title.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingCandidate {
    /// Source document file name
    pub document: String,
    /// Trimmed span text
    pub title: String,
    /// Effective font size in points
    pub font_size: f32,
    /// Page number (1-indexed)
    pub page_number: u32,
}

/// Leading text of a content-heavy page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetCandidate {
    /// Source document file name
    pub document: String,
    /// First tokens of the page, single-space separated
    pub text: String,
    /// Character count of `text`
    pub length: usize,
    /// Page number (1-indexed)
    pub page_number: u32,
}

impl SnippetCandidate {
    /// Create a snippet, recording the character count of `text`.
    pub fn new(document: impl Into<String>, text: String, page_number: u32) -> Self {
        Self {
            document: document.into(),
            length: text.chars().count(),
            text,
            page_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_length_counts_chars() {
        let snippet = SnippetCandidate::new("a.pdf", "Crème brûlée".to_string(), 2);
        assert_eq!(snippet.length, 12);
        assert_eq!(snippet.page_number, 2);
    }
}
