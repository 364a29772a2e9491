//! Data model shared by the extractors, the ranker and the report writer.
//!
//! Job specs come in, candidates flow between stages, and a
//! [`CollectionReport`] goes out. Field names of the serialized types are
//! the on-disk schema.

mod candidate;
mod job;
mod report;

pub use candidate::{HeadingCandidate, SnippetCandidate};
pub use job::{DocumentRef, JobSpec, JobToBeDone, Persona};
pub use report::{CollectionReport, ExtractedSection, ReportMetadata, SubsectionAnalysis};
