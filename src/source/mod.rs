//! Page text sources.
//!
//! The extractors never touch a PDF library directly. They consume
//! [`PageText`] values produced by a [`PdfTextSource`], which keeps the
//! heuristics testable without real documents and isolates lopdf behind
//! one implementation.

mod pdf_source;
mod spans;

pub use pdf_source::{ErrorMode, LopdfSource};

use std::path::Path;

use crate::error::Result;

/// A run of text drawn with a single font setting.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// The text content, untrimmed
    pub text: String,
    /// Effective font size in points
    pub font_size: f32,
    /// Base font name (e.g., "Helvetica-Bold")
    pub font_name: String,
}

impl TextSpan {
    /// Create a new text span.
    pub fn new(text: impl Into<String>, font_size: f32, font_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_name: font_name.into(),
        }
    }
}

/// Text content of one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,
    /// Spans in content stream order
    pub spans: Vec<TextSpan>,
    /// Plain page text with line breaks
    pub text: String,
}

impl PageText {
    /// Create an empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// Add a span to the page.
    pub fn with_span(mut self, span: TextSpan) -> Self {
        self.spans.push(span);
        self
    }

    /// Set the plain page text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Anything that can turn a file into per-page text.
pub trait PdfTextSource {
    /// Load every page of the document at `path`, in page order.
    fn load(&self, path: &Path) -> Result<Vec<PageText>>;
}

impl<S: PdfTextSource + ?Sized> PdfTextSource for &S {
    fn load(&self, path: &Path) -> Result<Vec<PageText>> {
        (**self).load(path)
    }
}
