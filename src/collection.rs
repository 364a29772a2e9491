//! Collection orchestration.
//!
//! A collection is a directory holding a job spec, a `PDFs` folder and,
//! once processed, the report. Documents are processed one after another;
//! a missing or unreadable document contributes nothing and never stops
//! the collection. A bad job spec does stop it.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{Error, Result};
use crate::extract::{extract_headings, extract_snippets, ExtractOptions};
use crate::model::{CollectionReport, HeadingCandidate, JobSpec, ReportMetadata, SnippetCandidate};
use crate::rank::{rank_headings, rank_snippets, RankOptions};
use crate::render::{write_report, JsonFormat};
use crate::source::{LopdfSource, PdfTextSource};

/// Collection directories processed when none are named.
pub const DEFAULT_COLLECTIONS: [&str; 3] = ["Collection 1", "Collection 2", "Collection 3"];

/// File names inside a collection directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionLayout {
    /// Job spec file name
    pub input_file: String,
    /// Report file name
    pub output_file: String,
    /// Subdirectory holding the listed documents
    pub pdf_dir: String,
}

impl Default for CollectionLayout {
    fn default() -> Self {
        Self {
            input_file: "challenge1b_input.json".to_string(),
            output_file: "challenge1b_output.json".to_string(),
            pdf_dir: "PDFs".to_string(),
        }
    }
}

impl CollectionLayout {
    pub fn input_path(&self, collection: &Path) -> PathBuf {
        collection.join(&self.input_file)
    }

    pub fn output_path(&self, collection: &Path) -> PathBuf {
        collection.join(&self.output_file)
    }

    pub fn document_path(&self, collection: &Path, filename: &str) -> PathBuf {
        collection.join(&self.pdf_dir).join(filename)
    }
}

/// What happened to one listed document.
#[derive(Debug)]
pub enum DocumentOutcome {
    /// The document was read; either list may be empty
    Extracted {
        headings: Vec<HeadingCandidate>,
        snippets: Vec<SnippetCandidate>,
    },
    /// No file at the expected path
    Missing,
    /// The file exists but could not be read
    Failed(Error),
}

/// Per-collection document counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentTally {
    pub processed: usize,
    pub missing: usize,
    pub failed: usize,
}

/// A collection that was processed and written.
#[derive(Debug, Clone)]
pub struct CollectionRun {
    pub report: CollectionReport,
    pub output_path: PathBuf,
    pub tally: DocumentTally,
}

/// Drives extraction, ranking and report writing for collections.
#[derive(Debug, Clone)]
pub struct CollectionProcessor<S = LopdfSource> {
    source: S,
    layout: CollectionLayout,
    extract: ExtractOptions,
    rank: RankOptions,
    format: JsonFormat,
}

impl CollectionProcessor<LopdfSource> {
    /// Create a processor reading PDFs with lopdf.
    pub fn new() -> Self {
        Self::with_source(LopdfSource::new())
    }
}

impl Default for CollectionProcessor<LopdfSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PdfTextSource> CollectionProcessor<S> {
    /// Create a processor over a custom text source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            layout: CollectionLayout::default(),
            extract: ExtractOptions::default(),
            rank: RankOptions::default(),
            format: JsonFormat::default(),
        }
    }

    /// Set the collection file layout.
    pub fn with_layout(mut self, layout: CollectionLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set extraction thresholds.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Set ranking limits.
    pub fn with_rank_options(mut self, options: RankOptions) -> Self {
        self.rank = options;
        self
    }

    /// Set the report JSON format.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    pub fn layout(&self) -> &CollectionLayout {
        &self.layout
    }

    /// Extract candidates from one document.
    pub fn extract_document(&self, path: &Path, filename: &str) -> DocumentOutcome {
        if !path.exists() {
            return DocumentOutcome::Missing;
        }

        match self.source.load(path) {
            Ok(pages) => DocumentOutcome::Extracted {
                headings: extract_headings(filename, &pages, &self.extract),
                snippets: extract_snippets(filename, &pages, &self.extract),
            },
            Err(e) => DocumentOutcome::Failed(e),
        }
    }

    /// Build the report for `collection`, stamped with the current local time.
    pub fn build_report(&self, collection: &Path) -> Result<(CollectionReport, DocumentTally)> {
        let job = JobSpec::from_file(self.layout.input_path(collection))?;
        let timestamp = Local::now().naive_local();
        Ok(self.build_report_for(collection, &job, timestamp))
    }

    /// Build the report for an already loaded job spec.
    pub fn build_report_for(
        &self,
        collection: &Path,
        job: &JobSpec,
        timestamp: NaiveDateTime,
    ) -> (CollectionReport, DocumentTally) {
        let mut headings = Vec::new();
        let mut snippets = Vec::new();
        let mut tally = DocumentTally::default();

        for doc in &job.documents {
            let path = self.layout.document_path(collection, &doc.filename);

            match self.extract_document(&path, &doc.filename) {
                DocumentOutcome::Extracted {
                    headings: h,
                    snippets: s,
                } => {
                    log::debug!(
                        "{}: {} heading candidates, {} snippet candidates",
                        doc.filename,
                        h.len(),
                        s.len()
                    );
                    headings.extend(h);
                    snippets.extend(s);
                    tally.processed += 1;
                }
                DocumentOutcome::Missing => {
                    log::warn!("Missing file: {}", doc.filename);
                    tally.missing += 1;
                }
                DocumentOutcome::Failed(e) => {
                    log::warn!("Error processing {}: {}", doc.filename, e);
                    tally.failed += 1;
                }
            }
        }

        let mut report = CollectionReport::new(ReportMetadata::new(job, timestamp));
        report.extracted_sections = rank_headings(&headings, &self.rank);
        report.subsection_analysis = rank_snippets(&snippets, &self.rank);

        (report, tally)
    }

    /// Process `collection` and write its report.
    pub fn process(&self, collection: &Path) -> Result<CollectionRun> {
        let (report, tally) = self.build_report(collection)?;
        let output_path = self.layout.output_path(collection);
        write_report(&report, &output_path, self.format)?;

        log::info!("Output saved to {}", output_path.display());
        Ok(CollectionRun {
            report,
            output_path,
            tally,
        })
    }
}

/// Result of one entry of a batch.
#[derive(Debug, Clone)]
pub enum BatchEntry {
    /// The collection was processed
    Written { name: String, run: CollectionRun },
    /// The collection directory does not exist
    Skipped { name: String, path: PathBuf },
}

/// Outcome of [`run_batch`], in processing order.
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    /// Reports that were written.
    pub fn written(&self) -> impl Iterator<Item = &CollectionRun> {
        self.entries.iter().filter_map(|e| match e {
            BatchEntry::Written { run, .. } => Some(run),
            BatchEntry::Skipped { .. } => None,
        })
    }

    /// Names of collections that were skipped.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match e {
            BatchEntry::Skipped { name, .. } => Some(name.as_str()),
            BatchEntry::Written { .. } => None,
        })
    }
}

/// Process `base/<name>` for each name, in order.
///
/// Missing directories are skipped. The first collection whose job spec
/// cannot be read aborts the batch.
pub fn run_batch<S, I, N>(
    processor: &CollectionProcessor<S>,
    base: &Path,
    names: I,
) -> Result<BatchSummary>
where
    S: PdfTextSource,
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    run_batch_with(processor, base, names, |_| {})
}

/// Like [`run_batch`], calling `on_entry` as each collection finishes.
pub fn run_batch_with<S, I, N, F>(
    processor: &CollectionProcessor<S>,
    base: &Path,
    names: I,
    mut on_entry: F,
) -> Result<BatchSummary>
where
    S: PdfTextSource,
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
    F: FnMut(&BatchEntry),
{
    let mut summary = BatchSummary::default();

    for name in names {
        let name = name.as_ref().to_string();
        let path = base.join(&name);

        let entry = if path.is_dir() {
            log::info!("Processing {}...", name);
            let run = processor.process(&path)?;
            BatchEntry::Written { name, run }
        } else {
            log::warn!("Skipped: {} folder not found", name);
            BatchEntry::Skipped { name, path }
        };

        on_entry(&entry);
        summary.entries.push(entry);
    }

    Ok(summary)
}
