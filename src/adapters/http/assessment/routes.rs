//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    finish_assessment, generate_report, get_report, get_session, list_statements, print_report,
    rate_statement, reset_session, start_assessment, update_reflections, AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", get(get_session))
        .route("/statements", get(list_statements))
        .route("/start", post(start_assessment))
        .route("/answers/:id", put(rate_statement))
        .route("/finish", post(finish_assessment))
        .route("/reflections", put(update_reflections))
        .route("/report", post(generate_report).get(get_report))
        .route("/report/print", get(print_report))
        .route("/reset", post(reset_session))
        .with_state(handlers)
}
