//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::assessment::{DimensionGroup, Reflections};
use crate::domain::foundation::{ErrorCode, StatementId, TrafficLight};
use crate::domain::session::{Advance, AssessmentSession, BlockReason, Progress, SessionError, Stage};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to rate one statement.
#[derive(Debug, Clone, Deserialize)]
pub struct RateStatementRequest {
    pub rating: TrafficLight,
}

/// Request to update reflections. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReflectionsRequest {
    #[serde(default)]
    pub strengths: Option<String>,
    #[serde(default)]
    pub limitations: Option<String>,
}

/// Query parameters for fetching the report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQuery {
    /// Attach the dimension radar chart.
    #[serde(default)]
    pub chart: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Snapshot of the session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub stage: Stage,
    pub progress: Progress,
    pub answers: BTreeMap<StatementId, TrafficLight>,
    pub missing: Vec<StatementId>,
    pub reflections: Reflections,
    pub has_report: bool,
}

impl From<&AssessmentSession> for SessionResponse {
    fn from(session: &AssessmentSession) -> Self {
        Self {
            session_id: session.id().to_string(),
            stage: session.stage(),
            progress: session.progress(),
            answers: session.responses().answers().clone(),
            missing: session.responses().missing(session.catalog()),
            reflections: session.responses().reflections().clone(),
            has_report: session.report().is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementResponse {
    pub id: StatementId,
    pub text: String,
}

/// Statements of one dimension, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionGroupResponse {
    pub dimension: String,
    pub statements: Vec<StatementResponse>,
}

impl From<DimensionGroup<'_>> for DimensionGroupResponse {
    fn from(group: DimensionGroup<'_>) -> Self {
        Self {
            dimension: group.dimension.display_name().to_string(),
            statements: group
                .statements
                .into_iter()
                .map(|s| StatementResponse {
                    id: s.id,
                    text: s.text.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatementsResponse {
    pub total: usize,
    pub groups: Vec<DimensionGroupResponse>,
}

/// Outcome of a stage transition request.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionResponse {
    pub advanced: bool,
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<StatementId>>,
}

impl TransitionResponse {
    pub fn new(advance: &Advance, stage: Stage) -> Self {
        let missing = match advance.block_reason() {
            Some(BlockReason::Incomplete { missing }) => Some(missing.clone()),
            _ => None,
        };
        Self {
            advanced: advance.is_moved(),
            stage,
            reason: advance.block_reason().map(|r| r.to_string()),
            missing,
        }
    }

    /// An unconditional move, e.g. reset.
    pub fn moved_to(stage: Stage) -> Self {
        Self {
            advanced: true,
            stage,
            reason: None,
            missing: None,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&SessionError> for ErrorResponse {
    fn from(error: &SessionError) -> Self {
        let response = Self::new(error.code(), error.to_string());
        match error {
            SessionError::WrongStage { current, .. } => {
                response.with_details(serde_json::json!({ "stage": current }))
            }
            _ => response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::StatementCatalog;
    use serde_json::json;

    #[test]
    fn rate_request_deserializes_lowercase() {
        let req: RateStatementRequest = serde_json::from_str(r#"{"rating": "amber"}"#).unwrap();
        assert_eq!(req.rating, TrafficLight::Amber);
    }

    #[test]
    fn rate_request_rejects_unknown_color() {
        assert!(serde_json::from_str::<RateStatementRequest>(r#"{"rating": "blue"}"#).is_err());
    }

    #[test]
    fn reflections_request_allows_partial_updates() {
        let req: UpdateReflectionsRequest =
            serde_json::from_str(r#"{"strengths": "I listen well"}"#).unwrap();
        assert_eq!(req.strengths.as_deref(), Some("I listen well"));
        assert!(req.limitations.is_none());
    }

    #[test]
    fn session_response_serializes_answers_by_id() {
        let mut session = AssessmentSession::new(StatementCatalog::reference());
        let _ = session.start();
        session.rate(StatementId::new(2), TrafficLight::Green).unwrap();

        let value = serde_json::to_value(SessionResponse::from(&session)).unwrap();

        assert_eq!(value["stage"], "assessment");
        assert_eq!(value["answers"], json!({ "2": "green" }));
        assert_eq!(value["progress"], json!({ "rated": 1, "total": 8 }));
        assert_eq!(value["missing"].as_array().unwrap().len(), 7);
        assert_eq!(value["has_report"], false);
    }

    #[test]
    fn blocked_transition_lists_missing_ids() {
        let advance = Advance::Blocked(BlockReason::Incomplete {
            missing: vec![StatementId::new(7)],
        });

        let value = serde_json::to_value(TransitionResponse::new(&advance, Stage::Assessment)).unwrap();

        assert_eq!(value["advanced"], false);
        assert_eq!(value["stage"], "assessment");
        assert_eq!(value["missing"], json!([7]));
        assert_eq!(value["reason"], "statements not yet rated: 7");
    }

    #[test]
    fn moved_transition_omits_reason() {
        let advance = Advance::Moved {
            from: Stage::Intro,
            to: Stage::Assessment,
        };
        let value = serde_json::to_value(TransitionResponse::new(&advance, Stage::Assessment)).unwrap();

        assert_eq!(value["advanced"], true);
        assert!(value.get("reason").is_none());
        assert!(value.get("missing").is_none());
    }

    #[test]
    fn wrong_stage_error_carries_stage_detail() {
        let error = SessionError::wrong_stage("rate statements", Stage::Intro);
        let response = ErrorResponse::from(&error);

        assert_eq!(response.code, "WRONG_STAGE");
        assert_eq!(response.details, Some(json!({ "stage": "intro" })));
    }
}
