//! Analyze endpoint — the full lookup → gap analysis → salary pipeline.

use std::collections::BTreeSet;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::analyze;
use crate::catalog::salary::RegionMap;
use crate::catalog::subjects::default_subjects_for_title;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_title: String,
    #[serde(default)]
    pub user_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub job_title: String,
    pub required_skills: Vec<String>,
    pub user_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommended_subjects: BTreeSet<String>,
    pub salary_info: RegionMap,
}

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let job_title = req.job_title.trim().to_string();
    if job_title.is_empty() {
        return Err(AppError::Validation("job_title must not be empty".to_string()));
    }

    let user_skills: Vec<String> = req
        .user_skills
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let occupation = state
        .occupations
        .search_occupation(&job_title)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No occupation found for '{job_title}'")))?;

    let required_skills = state.occupations.required_skills(&occupation.uri).await;
    if required_skills.is_empty() {
        return Err(AppError::NotFound(format!(
            "No skill data found for '{job_title}'"
        )));
    }

    let analysis = analyze(&required_skills, &user_skills, &state.subjects);

    // Last-resort fallback when the mapping knows none of the missing
    // skills. A user with no gap gets no recommendations at all.
    let recommended_subjects = if analysis.recommended_subjects.is_empty()
        && !analysis.missing_skills.is_empty()
    {
        default_subjects_for_title(&job_title)
            .iter()
            .map(|s| s.to_string())
            .collect()
    } else {
        analysis.recommended_subjects
    };

    let salary_info = state.salaries.regions(&job_title);

    Ok(Json(AnalyzeResponse {
        job_title,
        required_skills,
        user_skills,
        missing_skills: analysis.missing_skills,
        recommended_subjects,
        salary_info,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::catalog::{SalaryCatalog, SalaryRange, SubjectCatalog};
    use crate::config::Config;
    use crate::esco::{Occupation, OccupationLookup};

    /// Fake lookup backed by fixed data, standing in for the ESCO client.
    struct FakeLookup {
        occupation: Option<Occupation>,
        skills: Vec<String>,
    }

    #[async_trait]
    impl OccupationLookup for FakeLookup {
        async fn search_occupation(&self, _job_title: &str) -> Option<Occupation> {
            self.occupation.clone()
        }

        async fn required_skills(&self, _occupation_uri: &str) -> Vec<String> {
            self.skills.clone()
        }
    }

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn make_state(lookup: FakeLookup) -> AppState {
        let subjects = SubjectCatalog::from_map(HashMap::from([
            ("sql".to_string(), strs(&["technology"])),
            ("statistics".to_string(), strs(&["mathematics", "science"])),
        ]));
        let salaries = SalaryCatalog::from_map(HashMap::from([(
            "data analyst".to_string(),
            BTreeMap::from([(
                "western".to_string(),
                SalaryRange {
                    min: Some(60000.0),
                    max: Some(95000.0),
                    currency: Some("USD".to_string()),
                },
            )]),
        )]));
        AppState {
            occupations: Arc::new(lookup),
            subjects: Arc::new(subjects),
            salaries: Arc::new(salaries),
            config: Config::from_env().unwrap(),
        }
    }

    fn data_analyst_lookup() -> FakeLookup {
        FakeLookup {
            occupation: Some(Occupation {
                uri: "esco/occupation/abc".to_string(),
                title: Some("data analyst".to_string()),
            }),
            skills: strs(&["Python", "SQL", "Statistics"]),
        }
    }

    #[tokio::test]
    async fn test_analyze_happy_path() {
        let state = make_state(data_analyst_lookup());
        let req = AnalyzeRequest {
            job_title: "Data Analyst".to_string(),
            user_skills: strs(&["Python", "Excel"]),
        };

        let Json(response) = handle_analyze(State(state), Json(req)).await.unwrap();
        assert_eq!(response.missing_skills, strs(&["SQL", "Statistics"]));
        assert_eq!(
            response.recommended_subjects,
            BTreeSet::from([
                "mathematics".to_string(),
                "science".to_string(),
                "technology".to_string(),
            ])
        );
        assert_eq!(response.salary_info["western"].min, Some(60000.0));
    }

    #[tokio::test]
    async fn test_blank_job_title_is_validation_error() {
        let state = make_state(data_analyst_lookup());
        let req = AnalyzeRequest {
            job_title: "   ".to_string(),
            user_skills: vec![],
        };

        let err = handle_analyze(State(state), Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unknown_occupation_is_not_found() {
        let state = make_state(FakeLookup {
            occupation: None,
            skills: vec![],
        });
        let req = AnalyzeRequest {
            job_title: "Dream Weaver".to_string(),
            user_skills: vec![],
        };

        let err = handle_analyze(State(state), Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_skill_data_is_not_found() {
        let state = make_state(FakeLookup {
            occupation: Some(Occupation {
                uri: "esco/occupation/xyz".to_string(),
                title: None,
            }),
            skills: vec![],
        });
        let req = AnalyzeRequest {
            job_title: "Data Analyst".to_string(),
            user_skills: vec![],
        };

        let err = handle_analyze(State(state), Json(req)).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_blank_user_skills_are_dropped() {
        let state = make_state(data_analyst_lookup());
        let req = AnalyzeRequest {
            job_title: "Data Analyst".to_string(),
            user_skills: strs(&["  python  ", "", "  "]),
        };

        let Json(response) = handle_analyze(State(state), Json(req)).await.unwrap();
        assert_eq!(response.user_skills, strs(&["python"]));
        assert_eq!(response.missing_skills, strs(&["SQL", "Statistics"]));
    }

    #[tokio::test]
    async fn test_unmapped_skills_fall_back_to_title_defaults() {
        let state = make_state(FakeLookup {
            occupation: Some(Occupation {
                uri: "esco/occupation/ds".to_string(),
                title: Some("data scientist".to_string()),
            }),
            skills: strs(&["Quantum Telepathy"]),
        });
        let req = AnalyzeRequest {
            job_title: "Data Scientist".to_string(),
            user_skills: vec![],
        };

        let Json(response) = handle_analyze(State(state), Json(req)).await.unwrap();
        assert_eq!(
            response.recommended_subjects,
            BTreeSet::from([
                "mathematics".to_string(),
                "science".to_string(),
                "technology".to_string(),
            ])
        );
    }

    #[tokio::test]
    async fn test_no_gap_yields_no_recommendations() {
        // Owning every required skill must not trigger the title defaults:
        // recommendations derive solely from missing skills.
        let state = make_state(FakeLookup {
            occupation: Some(Occupation {
                uri: "esco/occupation/ds".to_string(),
                title: Some("data scientist".to_string()),
            }),
            skills: strs(&["Python"]),
        });
        let req = AnalyzeRequest {
            job_title: "Data Scientist".to_string(),
            user_skills: strs(&["python"]),
        };

        let Json(response) = handle_analyze(State(state), Json(req)).await.unwrap();
        assert!(response.missing_skills.is_empty());
        assert!(response.recommended_subjects.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_salary_title_yields_empty_map() {
        let state = make_state(FakeLookup {
            occupation: Some(Occupation {
                uri: "esco/occupation/chef".to_string(),
                title: Some("chef".to_string()),
            }),
            skills: strs(&["Cooking"]),
        });
        let req = AnalyzeRequest {
            job_title: "Chef".to_string(),
            user_skills: vec![],
        };

        let Json(response) = handle_analyze(State(state), Json(req)).await.unwrap();
        assert!(response.salary_info.is_empty());
    }
}
