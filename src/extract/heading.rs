//! Heading candidate detection.

use super::ExtractOptions;
use crate::model::HeadingCandidate;
use crate::source::{PageText, TextSpan};

/// Check whether a span qualifies as a heading.
///
/// All four conditions must hold on the trimmed text: long enough, large
/// enough font, starts with an uppercase letter, no trailing period.
pub fn is_heading(span: &TextSpan, options: &ExtractOptions) -> bool {
    let text = span.text.trim();

    text.chars().count() >= options.min_heading_chars
        && span.font_size >= options.min_heading_font_size
        && text.chars().next().is_some_and(char::is_uppercase)
        && !text.ends_with('.')
}

/// Collect heading candidates from `pages` in page then span order.
///
/// Repeated headings (running titles, for instance) are kept.
pub fn extract_headings(
    document: &str,
    pages: &[PageText],
    options: &ExtractOptions,
) -> Vec<HeadingCandidate> {
    pages
        .iter()
        .flat_map(|page| {
            page.spans
                .iter()
                .filter(|span| is_heading(span, options))
                .map(move |span| HeadingCandidate {
                    document: document.to_string(),
                    title: span.text.trim().to_string(),
                    font_size: span.font_size,
                    page_number: page.number,
                })
        })
        .collect()
}
