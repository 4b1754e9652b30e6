//! Subject catalog — maps skills to the school subjects that teach them.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, error};

/// The canonical subject tags shipped in `data/subjects_mapping.json`.
/// Lookups are NOT restricted to this set — whatever the table contains
/// is treated as valid.
pub const SUBJECT_CATEGORIES: [&str; 7] = [
    "mathematics",
    "science",
    "technology",
    "business",
    "humanities",
    "arts",
    "languages",
];

/// Fallback recommendations for well-known job titles, used when the
/// skill mapping yields nothing for a request.
const DEFAULT_TITLE_RECOMMENDATIONS: [(&str, &[&str]); 5] = [
    ("software developer", &["mathematics", "technology"]),
    ("data scientist", &["mathematics", "science", "technology"]),
    ("doctor", &["science"]),
    ("lawyer", &["humanities", "languages"]),
    ("civil engineer", &["mathematics", "science", "technology"]),
];

/// Immutable mapping from lowercased skill name to an ordered list of
/// subject tags. Loaded once per process; never mutated after load.
#[derive(Debug, Default)]
pub struct SubjectCatalog {
    map: HashMap<String, Vec<String>>,
}

impl SubjectCatalog {
    /// Loads the mapping from a JSON file of `{"skill": ["tag", ...]}`.
    /// An unreadable or malformed file degrades to an empty catalog —
    /// the caller never has to treat a load failure as fatal.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Subject mapping file not readable: {}: {e}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<HashMap<String, Vec<String>>>(&raw) {
            Ok(map) => {
                debug!(
                    "Loaded subject mapping from {} ({} skills)",
                    path.display(),
                    map.len()
                );
                // Keys are lowercased in the data file, but re-fold here so
                // a hand-edited entry still matches.
                Self {
                    map: map
                        .into_iter()
                        .map(|(skill, tags)| (skill.to_lowercase(), tags))
                        .collect(),
                }
            }
            Err(e) => {
                error!("Invalid JSON in subject mapping file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Builds a catalog from an in-memory table. Test seam.
    pub fn from_map(map: HashMap<String, Vec<String>>) -> Self {
        Self {
            map: map
                .into_iter()
                .map(|(skill, tags)| (skill.to_lowercase(), tags))
                .collect(),
        }
    }

    /// Subject tags for a skill, matched case-insensitively.
    /// An unknown skill yields the empty slice, never an error.
    pub fn subjects_for(&self, skill: &str) -> &[String] {
        self.map
            .get(&skill.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// Compiled-in default subjects for a job title, used as a last resort
/// when the skill mapping produced no recommendations.
pub fn default_subjects_for_title(job_title: &str) -> &'static [&'static str] {
    let key = job_title.trim().to_lowercase();
    DEFAULT_TITLE_RECOMMENDATIONS
        .iter()
        .find(|(title, _)| *title == key)
        .map(|(_, subjects)| *subjects)
        .unwrap_or(&[])
}
