//! Snippet candidate extraction.

use super::ExtractOptions;
use crate::model::SnippetCandidate;
use crate::source::PageText;

/// Flatten page text onto one line and trim it.
pub fn flatten_page_text(text: &str) -> String {
    text.trim().replace('\n', " ")
}

/// Build the snippet for one page, if the page carries enough text.
///
/// The page length test is strict: exactly `min_snippet_chars` characters
/// yields nothing.
pub fn page_snippet(
    document: &str,
    page: &PageText,
    options: &ExtractOptions,
) -> Option<SnippetCandidate> {
    let text = flatten_page_text(&page.text);
    if text.chars().count() <= options.min_snippet_chars {
        return None;
    }

    let snippet = text
        .split_whitespace()
        .take(options.max_snippet_tokens)
        .collect::<Vec<_>>()
        .join(" ");

    Some(SnippetCandidate::new(document, snippet, page.number))
}

/// Collect at most one snippet per page, in page order.
pub fn extract_snippets(
    document: &str,
    pages: &[PageText],
    options: &ExtractOptions,
) -> Vec<SnippetCandidate> {
    pages
        .iter()
        .filter_map(|page| page_snippet(document, page, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (0..n).map(|i| format!("word{}", i)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_exactly_threshold_is_skipped() {
        let page = PageText::new(1).with_text("x".repeat(300));
        assert!(page_snippet("a.pdf", &page, &ExtractOptions::default()).is_none());

        let page = PageText::new(1).with_text("x".repeat(301));
        let snippet = page_snippet("a.pdf", &page, &ExtractOptions::default()).unwrap();
        assert_eq!(snippet.length, 301);
    }

    #[test]
    fn test_threshold_measured_after_trim() {
        let text = format!("   {}   \n", "y".repeat(300));
        let page = PageText::new(1).with_text(text);
        assert!(page_snippet("a.pdf", &page, &ExtractOptions::default()).is_none());
    }

    #[test]
    fn test_truncates_to_token_cap() {
        let page = PageText::new(7).with_text(words(250));
        let snippet = page_snippet("a.pdf", &page, &ExtractOptions::default()).unwrap();

        assert_eq!(snippet.text.split_whitespace().count(), 100);
        assert!(snippet.text.starts_with("word0 word1 word2"));
        assert!(snippet.text.ends_with("word99"));
        assert_eq!(snippet.length, snippet.text.chars().count());
        assert_eq!(snippet.page_number, 7);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let text = format!("Alpha\n\n  beta\t gamma {}", "z ".repeat(200));
        let page = PageText::new(1).with_text(text);
        let snippet = page_snippet("a.pdf", &page, &ExtractOptions::default()).unwrap();
        assert!(snippet.text.starts_with("Alpha beta gamma z z"));
        assert!(!snippet.text.contains("  "));
    }

    #[test]
    fn test_extract_snippets_skips_short_pages() {
        let pages = vec![
            PageText::new(1).with_text(words(120)),
            PageText::new(2).with_text("short page"),
            PageText::new(3).with_text(words(80)),
        ];
        let snippets = extract_snippets("a.pdf", &pages, &ExtractOptions::default());
        let numbers: Vec<_> = snippets.iter().map(|s| s.page_number).collect();
        assert_eq!(numbers, vec![1, 3]);
    }
}
