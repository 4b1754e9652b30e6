use std::sync::Arc;

use crate::catalog::{SalaryCatalog, SubjectCatalog};
use crate::config::Config;
use crate::esco::OccupationLookup;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The catalogs are loaded once at startup and shared by immutable
/// reference; nothing here is mutated after construction, so concurrent
/// requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable occupation/skills lookup. Default: `EscoClient`.
    pub occupations: Arc<dyn OccupationLookup>,
    pub subjects: Arc<SubjectCatalog>,
    pub salaries: Arc<SalaryCatalog>,
    pub config: Config,
}
