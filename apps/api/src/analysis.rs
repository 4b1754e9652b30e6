//! Skill-gap analysis — the pure core of the service.
//!
//! Computes which required skills a user lacks and which school subjects
//! would close the gap. No I/O, no hidden state: the subject catalog is
//! passed in by shared reference and every function is total over
//! well-formed inputs.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::catalog::SubjectCatalog;

/// Result of one gap analysis. Created fresh per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Required skills the user lacks, in the order (and casing) the
    /// required list supplied them.
    pub missing_skills: Vec<String>,
    /// Deduplicated subject tags derived from the missing skills.
    /// BTreeSet serializes in lexicographic order.
    pub recommended_subjects: BTreeSet<String>,
}

/// Required skills not covered by any owned skill.
///
/// Matching is an exact case-insensitive fold: no trimming of internal
/// whitespace, no punctuation normalization, no fuzzy matching. Output
/// preserves the required list's order and original casing.
pub fn missing_skills(required: &[String], owned: &[String]) -> Vec<String> {
    let owned_folded: HashSet<String> = owned.iter().map(|s| s.to_lowercase()).collect();

    required
        .iter()
        .filter(|skill| !owned_folded.contains(&skill.to_lowercase()))
        .cloned()
        .collect()
}

/// Subject tags recommended for a set of missing skills.
///
/// Each skill is looked up case-insensitively in the catalog; a skill with
/// no mapping entry contributes nothing. The union is deduplicated.
pub fn recommend_subjects<'a, I>(missing: I, catalog: &SubjectCatalog) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    missing
        .into_iter()
        .flat_map(|skill| catalog.subjects_for(skill))
        .cloned()
        .collect()
}

/// Full analysis: missing skills plus recommended subjects.
pub fn analyze(required: &[String], owned: &[String], catalog: &SubjectCatalog) -> AnalysisResult {
    let missing = missing_skills(required, owned);
    let recommended = recommend_subjects(&missing, catalog);
    AnalysisResult {
        missing_skills: missing,
        recommended_subjects: recommended,
    }
}
