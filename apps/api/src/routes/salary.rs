use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::salary::{RegionMap, SalaryRange};
use crate::catalog::Region;
use crate::errors::AppError;
use crate::state::AppState;

/// Region arrives as a raw string so an unrecognized value can degrade to
/// the null sentinel instead of failing query deserialization.
#[derive(Debug, Deserialize)]
pub struct RegionQuery {
    pub region: Option<String>,
}

/// Either a single region's range or the full per-region map, depending on
/// whether the caller narrowed the lookup.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SalaryLookupResponse {
    Single(SalaryRange),
    AllRegions(RegionMap),
}

/// GET /api/v1/salary/:title?region=western
///
/// Unknown titles and regions are not errors: the response degrades to an
/// empty map (no region given) or the all-null sentinel range.
pub async fn handle_salary_lookup(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Query(params): Query<RegionQuery>,
) -> Result<Json<SalaryLookupResponse>, AppError> {
    let response = match params.region.as_deref() {
        Some(raw) => match Region::parse(raw) {
            Some(region) => SalaryLookupResponse::Single(state.salaries.get(&title, region)),
            None => SalaryLookupResponse::Single(SalaryRange::unknown()),
        },
        None => SalaryLookupResponse::AllRegions(state.salaries.regions(&title)),
    };
    Ok(Json(response))
}
