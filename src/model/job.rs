//! Collection job description.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A document listed by the job spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// File name relative to the collection's PDF directory
    pub filename: String,
}

/// The role the digest is written for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub role: String,
}

/// The task the persona wants to accomplish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobToBeDone {
    pub task: String,
}

/// Input description of one collection.
///
/// Unknown fields (such as `challenge_info` or per-document titles) are
/// accepted and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    pub documents: Vec<DocumentRef>,
    pub persona: Persona,
    pub job_to_be_done: JobToBeDone,
}

impl JobSpec {
    /// Read and parse a job spec file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|source| Error::JobSpec {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Document file names in job order.
    pub fn filenames(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.filename.clone()).collect()
    }

    /// The persona's role.
    pub fn role(&self) -> &str {
        &self.persona.role
    }

    /// The task description.
    pub fn task(&self) -> &str {
        &self.job_to_be_done.task
    }
}
