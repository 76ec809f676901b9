//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::Mutex;

use crate::application::handlers::assessment::AssessmentWorkflow;
use crate::domain::assessment::ReflectionField;
use crate::domain::foundation::{ErrorCode, StatementId};
use crate::domain::session::SessionError;
use crate::ports::{ReportDocument, ReportRenderer};

use super::dto::{
    DimensionGroupResponse, ErrorResponse, RateStatementRequest, ReportQuery, SessionResponse,
    StatementsResponse, TransitionResponse, UpdateReflectionsRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state: the single session and the renderer.
///
/// The mutex is held across report generation, so no other request is
/// applied while the session is analyzing.
#[derive(Clone)]
pub struct AssessmentHandlers {
    workflow: Arc<Mutex<AssessmentWorkflow>>,
    renderer: Arc<dyn ReportRenderer>,
}

impl AssessmentHandlers {
    pub fn new(workflow: AssessmentWorkflow, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self {
            workflow: Arc::new(Mutex::new(workflow)),
            renderer,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/assessment - Current session snapshot
pub async fn get_session(State(handlers): State<AssessmentHandlers>) -> Response {
    let workflow = handlers.workflow.lock().await;
    (StatusCode::OK, Json(SessionResponse::from(workflow.session()))).into_response()
}

/// GET /api/assessment/statements - Catalog grouped by dimension
pub async fn list_statements(State(handlers): State<AssessmentHandlers>) -> Response {
    let workflow = handlers.workflow.lock().await;
    let catalog = workflow.session().catalog();

    let response = StatementsResponse {
        total: catalog.len(),
        groups: catalog
            .group_by_dimension()
            .into_iter()
            .map(DimensionGroupResponse::from)
            .collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/assessment/start - Intro → Assessment
pub async fn start_assessment(State(handlers): State<AssessmentHandlers>) -> Response {
    let mut workflow = handlers.workflow.lock().await;
    let advance = workflow.start();
    transition_response(TransitionResponse::new(&advance, workflow.session().stage()))
}

/// PUT /api/assessment/answers/:id - Rate one statement
pub async fn rate_statement(
    State(handlers): State<AssessmentHandlers>,
    Path(statement_id): Path<String>,
    Json(req): Json<RateStatementRequest>,
) -> Response {
    let statement_id = match statement_id.parse::<StatementId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid statement ID")),
            )
                .into_response()
        }
    };

    let mut workflow = handlers.workflow.lock().await;
    match workflow.rate(statement_id, req.rating) {
        Ok(()) => {
            tracing::debug!(statement_id = %statement_id, rating = %req.rating, "Statement rated");
            (StatusCode::OK, Json(SessionResponse::from(workflow.session()))).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/assessment/finish - Assessment → Reflection
pub async fn finish_assessment(State(handlers): State<AssessmentHandlers>) -> Response {
    let mut workflow = handlers.workflow.lock().await;
    let advance = workflow.finish_assessment();
    transition_response(TransitionResponse::new(&advance, workflow.session().stage()))
}

/// PUT /api/assessment/reflections - Update one or both reflections
pub async fn update_reflections(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<UpdateReflectionsRequest>,
) -> Response {
    let mut workflow = handlers.workflow.lock().await;

    let updates = [
        (ReflectionField::Strengths, req.strengths),
        (ReflectionField::Limitations, req.limitations),
    ];
    for (field, text) in updates {
        if let Some(text) = text {
            if let Err(e) = workflow.set_reflection(field, text) {
                return handle_session_error(e);
            }
        }
    }

    (StatusCode::OK, Json(SessionResponse::from(workflow.session()))).into_response()
}

/// POST /api/assessment/report - Reflection → Analyzing → Report
///
/// Generation runs on its own task, so it completes and resolves the session
/// even if the client disconnects first.
pub async fn generate_report(State(handlers): State<AssessmentHandlers>) -> Response {
    let workflow = Arc::clone(&handlers.workflow);
    let generation = tokio::spawn(async move {
        let mut workflow = workflow.lock_owned().await;
        let advance = workflow.generate_report().await;
        TransitionResponse::new(&advance, workflow.session().stage())
    });

    match generation.await {
        Ok(response) => transition_response(response),
        Err(e) => {
            tracing::error!(error = %e, "Report generation task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    ErrorCode::InternalError,
                    "Report generation failed",
                )),
            )
                .into_response()
        }
    }
}

/// GET /api/assessment/report - Rendered report document
pub async fn get_report(
    State(handlers): State<AssessmentHandlers>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let workflow = handlers.workflow.lock().await;
    match render_document(&handlers, &workflow, query.chart) {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/assessment/report/print - Report as Markdown
pub async fn print_report(
    State(handlers): State<AssessmentHandlers>,
    Query(query): Query<ReportQuery>,
) -> Response {
    let workflow = handlers.workflow.lock().await;
    let document = match render_document(&handlers, &workflow, query.chart) {
        Ok(document) => document,
        Err(e) => return handle_session_error(e),
    };
    let markdown = handlers.renderer.to_printable(&document);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    )
        .into_response()
}

/// POST /api/assessment/reset - Back to intro, clearing everything
pub async fn reset_session(State(handlers): State<AssessmentHandlers>) -> Response {
    let mut workflow = handlers.workflow.lock().await;
    workflow.reset();
    tracing::info!("Assessment session reset");
    transition_response(TransitionResponse::moved_to(workflow.session().stage()))
}

fn render_document(
    handlers: &AssessmentHandlers,
    workflow: &AssessmentWorkflow,
    with_chart: bool,
) -> Result<ReportDocument, SessionError> {
    let report = workflow.report()?;
    Ok(if with_chart {
        handlers
            .renderer
            .render_with_profile(report, &workflow.score_profile())
    } else {
        handlers.renderer.render(report)
    })
}

fn transition_response(response: TransitionResponse) -> Response {
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_session_error(error: SessionError) -> Response {
    let status = match error {
        SessionError::UnknownStatement(_) => StatusCode::BAD_REQUEST,
        SessionError::WrongStage { .. } => StatusCode::CONFLICT,
        SessionError::ReportUnavailable => StatusCode::CONFLICT,
    };
    (status, Json(ErrorResponse::from(&error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::Stage;

    #[test]
    fn unknown_statement_maps_to_400() {
        let response = handle_session_error(SessionError::UnknownStatement(StatementId::new(99)));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn wrong_stage_maps_to_409() {
        let response =
            handle_session_error(SessionError::wrong_stage("rate statements", Stage::Report));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn report_unavailable_maps_to_409() {
        let response = handle_session_error(SessionError::ReportUnavailable);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
