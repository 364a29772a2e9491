//! # pdfdigest
//!
//! Persona-driven digests for collections of PDF documents.
//!
//! A collection directory holds a job spec (`challenge1b_input.json`)
//! naming a persona, a task and a list of documents under `PDFs/`. This
//! library pulls likely section headings and representative page
//! snippets out of those documents, ranks them, and writes
//! `challenge1b_output.json` next to the job spec.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdfdigest::Result<()> {
//!     let run = pdfdigest::process_collection("Collection 1")?;
//!     for section in &run.report.extracted_sections {
//!         println!("{} {}", section.importance_rank, section.section_title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Heuristics
//!
//! - **Headings**: spans of at least 10 characters, set in 12pt or larger,
//!   starting with an uppercase letter and not ending with a period. Each
//!   document keeps its two largest, then the five largest overall win.
//! - **Snippets**: the first 100 words of every page holding more than 300
//!   characters. The five longest win.
//!
//! Persona and task are carried into the report verbatim; they do not
//! influence ranking.

pub mod collection;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod rank;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use collection::{
    run_batch, run_batch_with, BatchEntry, BatchSummary, CollectionLayout, CollectionProcessor,
    CollectionRun, DocumentOutcome, DocumentTally, DEFAULT_COLLECTIONS,
};
pub use error::{Error, Result};
pub use extract::ExtractOptions;
pub use model::{
    CollectionReport, ExtractedSection, HeadingCandidate, JobSpec, ReportMetadata,
    SnippetCandidate, SubsectionAnalysis,
};
pub use rank::RankOptions;
pub use render::JsonFormat;
pub use source::{LopdfSource, PageText, PdfTextSource, TextSpan};

use std::path::Path;

/// Process one collection directory with default settings and write its
/// report.
///
/// # Example
///
/// ```no_run
/// let run = pdfdigest::process_collection("Collection 2").unwrap();
/// println!("{}", run.output_path.display());
/// ```
pub fn process_collection<P: AsRef<Path>>(path: P) -> Result<CollectionRun> {
    CollectionProcessor::new().process(path.as_ref())
}

/// Build a collection's report without writing it.
pub fn digest_collection<P: AsRef<Path>>(path: P) -> Result<CollectionReport> {
    let (report, _) = CollectionProcessor::new().build_report(path.as_ref())?;
    Ok(report)
}

/// Process the default collections under `base`.
///
/// # Example
///
/// ```no_run
/// let summary = pdfdigest::process_defaults(".").unwrap();
/// for name in summary.skipped() {
///     eprintln!("skipped {}", name);
/// }
/// ```
pub fn process_defaults<P: AsRef<Path>>(base: P) -> Result<BatchSummary> {
    run_batch(
        &CollectionProcessor::new(),
        base.as_ref(),
        DEFAULT_COLLECTIONS,
    )
}
