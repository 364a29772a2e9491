//! Heuristic heading and snippet extraction.

mod heading;
mod options;
mod snippet;

pub use heading::{extract_headings, is_heading};
pub use options::ExtractOptions;
pub use snippet::{extract_snippets, flatten_page_text, page_snippet};
