pub mod analyze;
pub mod health;
pub mod salary;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(analyze::handle_analyze))
        .route("/api/v1/salary/:title", get(salary::handle_salary_lookup))
        .with_state(state)
}
