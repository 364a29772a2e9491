//! Collection report written to `challenge1b_output.json`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::JobSpec;

/// Timestamp layout of `processing_timestamp` (local time, microseconds).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Report header echoing the job spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Every document the job spec listed, whether or not it was readable
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    pub processing_timestamp: String,
}

impl ReportMetadata {
    /// Build metadata for `job`, stamped with `timestamp`.
    pub fn new(job: &JobSpec, timestamp: NaiveDateTime) -> Self {
        Self {
            input_documents: job.filenames(),
            persona: job.role().to_string(),
            job_to_be_done: job.task().to_string(),
            processing_timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// A ranked heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSection {
    pub document: String,
    pub section_title: String,
    /// 1-based position in the final ranking
    pub importance_rank: u32,
    pub page_number: u32,
}

/// A ranked snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsectionAnalysis {
    pub document: String,
    pub refined_text: String,
    pub page_number: u32,
}

/// Digest of one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionReport {
    pub metadata: ReportMetadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}

impl CollectionReport {
    /// Create a report with no ranked entries.
    pub fn new(metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            extracted_sections: Vec::new(),
            subsection_analysis: Vec::new(),
        }
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.extracted_sections.is_empty() && self.subsection_analysis.is_empty()
    }
}
