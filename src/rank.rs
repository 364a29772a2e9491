//! Candidate ranking.
//!
//! Headings are ranked in two stages: each document first keeps its
//! largest headings, then the pooled survivors compete globally. A
//! document with many large headings can therefore never take every
//! slot before the other documents are considered. Snippets are ranked
//! in a single pass by length.
//!
//! Every sort here is stable, so ties keep the order in which candidates
//! were extracted.

use std::collections::HashMap;

use crate::model::{ExtractedSection, HeadingCandidate, SnippetCandidate, SubsectionAnalysis};

/// Selection limits for ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOptions {
    /// Headings each document may contribute to the global pool
    pub headings_per_document: usize,

    /// Maximum entries in `extracted_sections`
    pub max_sections: usize,

    /// Maximum entries in `subsection_analysis`
    pub max_snippets: usize,
}

impl RankOptions {
    /// Create rank options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set per-document heading quota.
    pub fn with_headings_per_document(mut self, n: usize) -> Self {
        self.headings_per_document = n;
        self
    }

    /// Set the section limit.
    pub fn with_max_sections(mut self, n: usize) -> Self {
        self.max_sections = n;
        self
    }

    /// Set the snippet limit.
    pub fn with_max_snippets(mut self, n: usize) -> Self {
        self.max_snippets = n;
        self
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            headings_per_document: 2,
            max_sections: 5,
            max_snippets: 5,
        }
    }
}

/// Group candidates by document, keeping first-seen document order and
/// extraction order within each group.
pub fn group_by_document(candidates: &[HeadingCandidate]) -> Vec<Vec<&HeadingCandidate>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&HeadingCandidate>> = Vec::new();

    for candidate in candidates {
        let slot = *index.entry(candidate.document.as_str()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(candidate);
    }

    groups
}

/// Stable top-k by descending font size.
fn largest_fonts<'a>(
    mut headings: Vec<&'a HeadingCandidate>,
    k: usize,
) -> Vec<&'a HeadingCandidate> {
    headings.sort_by(|a, b| b.font_size.total_cmp(&a.font_size));
    headings.truncate(k);
    headings
}

/// Rank headings into at most `max_sections` sections numbered from 1.
pub fn rank_headings(
    candidates: &[HeadingCandidate],
    options: &RankOptions,
) -> Vec<ExtractedSection> {
    let pool: Vec<&HeadingCandidate> = group_by_document(candidates)
        .into_iter()
        .flat_map(|group| largest_fonts(group, options.headings_per_document))
        .collect();

    largest_fonts(pool, options.max_sections)
        .into_iter()
        .zip(1u32..)
        .map(|(heading, rank)| ExtractedSection {
            document: heading.document.clone(),
            section_title: heading.title.clone(),
            importance_rank: rank,
            page_number: heading.page_number,
        })
        .collect()
}

/// Rank snippets by descending length, keeping at most `max_snippets`.
pub fn rank_snippets(
    candidates: &[SnippetCandidate],
    options: &RankOptions,
) -> Vec<SubsectionAnalysis> {
    let mut sorted: Vec<&SnippetCandidate> = candidates.iter().collect();
    sorted.sort_by(|a, b| b.length.cmp(&a.length));

    sorted
        .into_iter()
        .take(options.max_snippets)
        .map(|s| SubsectionAnalysis {
            document: s.document.clone(),
            refined_text: s.text.clone(),
            page_number: s.page_number,
        })
        .collect()
}
