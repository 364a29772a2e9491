//! lopdf-backed page text source.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use super::spans::page_spans;
use super::{PageText, PdfTextSource};
use crate::detect::sniff_pdf_version;
use crate::error::{Error, Result};

/// How page-level failures are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Any page failure fails the whole document
    #[default]
    Strict,
    /// Log and skip pages that cannot be decoded
    Lenient,
}

/// [`PdfTextSource`] that reads documents with lopdf.
#[derive(Debug, Clone, Default)]
pub struct LopdfSource {
    error_mode: ErrorMode,
}

impl LopdfSource {
    /// Create a strict source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip undecodable pages instead of failing the document.
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Current error mode.
    pub fn error_mode(&self) -> ErrorMode {
        self.error_mode
    }

    /// Read every page of an already loaded document.
    pub fn read_document(&self, doc: &LopdfDocument) -> Result<Vec<PageText>> {
        let page_ids = doc.get_pages();
        let mut pages = Vec::with_capacity(page_ids.len());

        for (&number, &page_id) in page_ids.iter() {
            let page = page_spans(doc, page_id).and_then(|spans| {
                let text = doc
                    .extract_text(&[number])
                    .map_err(|e| Error::TextExtract(format!("Page {}: {}", number, e)))?;
                Ok(PageText { number, spans, text })
            });

            match page {
                Ok(page) => pages.push(page),
                Err(e) if self.error_mode == ErrorMode::Lenient => {
                    log::warn!("Skipping page {}: {}", number, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(pages)
    }
}

impl PdfTextSource for LopdfSource {
    fn load(&self, path: &Path) -> Result<Vec<PageText>> {
        let version = sniff_pdf_version(path)?;
        log::debug!("Loading {} (PDF {})", path.display(), version);

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        if doc.is_encrypted() {
            log::warn!("{} is encrypted; text may be unreadable", path.display());
        }

        self.read_document(&doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Object, Stream};

    /// Two pages: the first points `Contents` at a non-stream object.
    fn doc_with_broken_first_page() -> LopdfDocument {
        let mut doc = LopdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let not_a_stream = doc.add_object(dictionary! { "Length" => Object::Integer(0) });
        let good_stream = doc.add_object(Stream::new(
            dictionary! {},
            b"BT /F1 16 Tf 72 700 Td (Packing Checklist) Tj ET".to_vec(),
        ));

        let mut kids = Vec::new();
        for contents in [not_a_stream, good_stream] {
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => contents,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => Object::Integer(2),
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc
    }

    #[test]
    fn test_strict_mode_fails_on_bad_page() {
        let doc = doc_with_broken_first_page();
        let result = LopdfSource::new().read_document(&doc);
        assert!(matches!(result, Err(Error::PdfParse(_))));
    }

    #[test]
    fn test_lenient_mode_skips_bad_page() {
        let doc = doc_with_broken_first_page();
        let pages = LopdfSource::new().lenient().read_document(&doc).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].number, 2);
        assert_eq!(pages[0].spans[0].text, "Packing Checklist");
        assert_eq!(pages[0].spans[0].font_size, 16.0);
    }

    #[test]
    fn test_builder() {
        assert_eq!(LopdfSource::new().error_mode(), ErrorMode::Strict);
        assert_eq!(LopdfSource::new().lenient().error_mode(), ErrorMode::Lenient);
        assert_eq!(
            LopdfSource::new()
                .with_error_mode(ErrorMode::Lenient)
                .error_mode(),
            ErrorMode::Lenient
        );
    }

    #[test]
    fn test_load_rejects_non_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.pdf");
        std::fs::write(&path, "plain text pretending to be a pdf").unwrap();

        let result = LopdfSource::new().load(&path);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = LopdfSource::new().load(&dir.path().join("absent.pdf"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
