//! Salary catalog — indicative salary ranges per job title and region.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Supported salary regions. A closed enum so a typo at a lookup call site
/// is a compile error; the underlying catalog stays keyed by plain strings
/// for data-file compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Africa,
    Western,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Africa, Region::Western];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "africa",
            Region::Western => "western",
        }
    }

    /// Parses a region key from untrusted input (trimmed, case-folded).
    /// Unknown keys are a lookup miss for the caller, not an error.
    pub fn parse(raw: &str) -> Option<Region> {
        match raw.trim().to_lowercase().as_str() {
            "africa" => Some(Region::Africa),
            "western" => Some(Region::Western),
            _ => None,
        }
    }
}

/// Salary range for one region. All fields are optional: the "unknown"
/// sentinel is a range with every field null, never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub currency: Option<String>,
}

impl SalaryRange {
    pub fn unknown() -> Self {
        Self::default()
    }
}

/// Per-region salary map for a single job title. BTreeMap keeps region
/// keys in a stable order when serialized.
pub type RegionMap = BTreeMap<String, SalaryRange>;

/// Immutable mapping from lowercased job title to per-region salary
/// ranges. Loaded once per process; never mutated after load.
#[derive(Debug, Default)]
pub struct SalaryCatalog {
    titles: HashMap<String, RegionMap>,
}

impl SalaryCatalog {
    /// Loads salary data from a JSON file shaped as
    /// `{"data analyst": {"africa": {"min": 5000, "max": 15000, "currency": "USD"}, ...}}`.
    /// Unreadable or malformed data degrades to an empty catalog.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Salary data file not readable: {}: {e}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<HashMap<String, RegionMap>>(&raw) {
            Ok(titles) => {
                debug!(
                    "Loaded salary data from {} ({} job titles)",
                    path.display(),
                    titles.len()
                );
                Self {
                    titles: titles
                        .into_iter()
                        .map(|(title, regions)| (title.to_lowercase(), regions))
                        .collect(),
                }
            }
            Err(e) => {
                error!("Invalid JSON in salary data file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Builds a catalog from an in-memory table. Test seam.
    pub fn from_map(titles: HashMap<String, RegionMap>) -> Self {
        Self {
            titles: titles
                .into_iter()
                .map(|(title, regions)| (title.to_lowercase(), regions))
                .collect(),
        }
    }

    /// Full per-region map for a job title (trimmed, case-insensitive).
    /// An unknown title yields an empty map.
    pub fn regions(&self, job_title: &str) -> RegionMap {
        let key = job_title.trim().to_lowercase();
        self.titles.get(&key).cloned().unwrap_or_default()
    }

    /// Salary range for one region of a job title. Unknown title or region
    /// yields the all-null sentinel.
    pub fn get(&self, job_title: &str, region: Region) -> SalaryRange {
        let key = job_title.trim().to_lowercase();
        self.titles
            .get(&key)
            .and_then(|regions| regions.get(region.as_str()))
            .cloned()
            .unwrap_or_else(SalaryRange::unknown)
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
