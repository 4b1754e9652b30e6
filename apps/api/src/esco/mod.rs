//! ESCO client — the single point of entry for all calls to the public
//! ESCO occupation/skills API.
//!
//! Failure policy: every transport or parse failure is logged and absorbed
//! here, surfacing as `None` or an empty list. The analyzer downstream
//! only ever sees an already-resolved (possibly empty) skill list.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::cache::ResponseCache;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum EscoError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },
}

/// A canonical occupation as returned by the ESCO search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occupation {
    #[serde(rename = "@id")]
    pub uri: String,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Occupation>,
}

#[derive(Debug, Deserialize)]
struct SkillEntry {
    #[serde(default)]
    title: Option<SkillTitle>,
}

#[derive(Debug, Deserialize)]
struct SkillTitle {
    #[serde(default)]
    en: Option<String>,
}

/// Resolves a free-text job title to a canonical occupation and its
/// required skills. Implementations must absorb their own failures.
#[async_trait]
pub trait OccupationLookup: Send + Sync {
    async fn search_occupation(&self, job_title: &str) -> Option<Occupation>;
    async fn required_skills(&self, occupation_uri: &str) -> Vec<String>;
}

/// Client for the ESCO API. Responses are cached through the injected
/// `ResponseCache` so repeated lookups for the same title stay local.
#[derive(Clone)]
pub struct EscoClient {
    client: Client,
    base_url: String,
    cache: Arc<dyn ResponseCache>,
}

impl EscoClient {
    pub fn new(base_url: String, cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            cache,
        }
    }

    async fn try_search(&self, job_title: &str) -> Result<Option<Occupation>, EscoError> {
        let url = format!("{}/resource/occupation", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("title", job_title), ("language", "en")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EscoError::Api {
                status: status.as_u16(),
            });
        }

        let data: SearchResponse = response.json().await?;
        if let Some(first) = data.results.into_iter().next() {
            debug!("Found occupation '{}' for '{job_title}'", first.uri);
            Ok(Some(first))
        } else {
            warn!("No occupations found for '{job_title}'");
            Ok(None)
        }
    }

    async fn try_required_skills(&self, occupation_uri: &str) -> Result<Vec<String>, EscoError> {
        let url = format!(
            "{}/resource/occupation/{occupation_uri}/hasSkill",
            self.base_url
        );
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EscoError::Api {
                status: status.as_u16(),
            });
        }

        let entries: Vec<SkillEntry> = response.json().await?;
        let skills: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| entry.title.and_then(|t| t.en))
            .filter(|name| !name.is_empty())
            .collect();

        debug!("Found {} skills for occupation {occupation_uri}", skills.len());
        Ok(skills)
    }
}

#[async_trait]
impl OccupationLookup for EscoClient {
    async fn search_occupation(&self, job_title: &str) -> Option<Occupation> {
        let cache_key = format!("occupation:{}", job_title.trim().to_lowercase());
        if let Some(cached) = self.cache.get(&cache_key) {
            return serde_json::from_value(cached).ok();
        }

        match self.try_search(job_title).await {
            Ok(Some(occupation)) => {
                if let Ok(value) = serde_json::to_value(&occupation) {
                    self.cache.set(&cache_key, value);
                }
                Some(occupation)
            }
            Ok(None) => None,
            Err(e) => {
                error!("ESCO occupation search failed: {e}");
                None
            }
        }
    }

    async fn required_skills(&self, occupation_uri: &str) -> Vec<String> {
        let cache_key = format!("skills:{occupation_uri}");
        if let Some(cached) = self.cache.get(&cache_key) {
            if let Ok(skills) = serde_json::from_value(cached) {
                return skills;
            }
        }

        match self.try_required_skills(occupation_uri).await {
            Ok(skills) => {
                if let Ok(value) = serde_json::to_value(&skills) {
                    self.cache.set(&cache_key, value);
                }
                skills
            }
            Err(e) => {
                error!("Failed to fetch skills for {occupation_uri}: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_occupation_deserializes_esco_shape() {
        let occupation: Occupation = serde_json::from_value(json!({
            "@id": "http://data.europa.eu/esco/occupation/abc123",
            "title": "data analyst"
        }))
        .unwrap();
        assert_eq!(occupation.uri, "http://data.europa.eu/esco/occupation/abc123");
        assert_eq!(occupation.title.as_deref(), Some("data analyst"));
    }

    #[test]
    fn test_search_response_tolerates_missing_results() {
        let response: SearchResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_skill_entries_drop_missing_english_titles() {
        let entries: Vec<SkillEntry> = serde_json::from_value(json!([
            {"title": {"en": "SQL"}},
            {"title": {}},
            {"title": {"en": ""}},
            {}
        ]))
        .unwrap();

        let skills: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| entry.title.and_then(|t| t.en))
            .filter(|name| !name.is_empty())
            .collect();
        assert_eq!(skills, vec!["SQL".to_string()]);
    }
}
