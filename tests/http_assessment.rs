//! HTTP-level tests driving the assessment API through the full router.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use pinnacle_assessment::adapters::ai::MockAIProvider;
use pinnacle_assessment::adapters::document::TemplateReportRenderer;
use pinnacle_assessment::adapters::http::{app_router, AssessmentHandlers};
use pinnacle_assessment::application::handlers::assessment::{
    ActionPlanGenerator, AssessmentWorkflow,
};
use pinnacle_assessment::domain::assessment::StatementCatalog;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app() -> Router {
    test_app_with(ActionPlanGenerator::offline())
}

fn test_app_with(generator: ActionPlanGenerator) -> Router {
    let workflow = AssessmentWorkflow::new(StatementCatalog::reference(), Arc::new(generator));
    let handlers = AssessmentHandlers::new(workflow, Arc::new(TemplateReportRenderer::new()));
    app_router(handlers, &[])
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, text) = send(app, method, uri, body).await;
    (status, serde_json::from_str(&text).unwrap())
}

async fn rate_all(app: &Router, rating: &str) {
    for id in 1..=8 {
        let (status, _) = send_json(
            app,
            Method::PUT,
            &format!("/api/assessment/answers/{}", id),
            Some(json!({ "rating": rating })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn healthz_reports_ok() {
    let app = test_app();
    let (status, body) = send_json(&app, Method::GET, "/healthz", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn statements_are_grouped_by_dimension() {
    let app = test_app();
    let (status, body) = send_json(&app, Method::GET, "/api/assessment/statements", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 8);
    let groups = body["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 5);
    assert_eq!(groups[0]["dimension"], "Presence & Impact");
    let counted: usize = groups
        .iter()
        .map(|g| g["statements"].as_array().unwrap().len())
        .sum();
    assert_eq!(counted, 8);
}

#[tokio::test]
async fn full_flow_produces_printable_report() {
    let app = test_app();

    let (_, session) = send_json(&app, Method::GET, "/api/assessment", None).await;
    assert_eq!(session["stage"], "intro");

    let (status, body) = send_json(&app, Method::POST, "/api/assessment/start", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["advanced"], true);
    assert_eq!(body["stage"], "assessment");

    rate_all(&app, "green").await;

    let (_, body) = send_json(&app, Method::POST, "/api/assessment/finish", None).await;
    assert_eq!(body["stage"], "reflection");

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/assessment/reflections",
        Some(json!({ "strengths": "I listen well", "limitations": "I avoid conflict" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reflections"]["strengths"], "I listen well");

    let (_, body) = send_json(&app, Method::POST, "/api/assessment/report", None).await;
    assert_eq!(body["advanced"], true);
    assert_eq!(body["stage"], "report");

    let (status, document) = send_json(&app, Method::GET, "/api/assessment/report?chart=true", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(document["title"], "Personal Action Plan");
    assert_eq!(document["action_table"]["rows"].as_array().unwrap().len(), 3);
    assert_eq!(document["chart"]["axes"].as_array().unwrap().len(), 5);

    let (status, markdown) = send(&app, Method::GET, "/api/assessment/report/print", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(markdown.starts_with("# Personal Action Plan"));
    assert!(markdown.contains("## 4. Action Steps (70/20/10)"));

    let (_, body) = send_json(&app, Method::POST, "/api/assessment/reset", None).await;
    assert_eq!(body["stage"], "intro");
    let (_, session) = send_json(&app, Method::GET, "/api/assessment", None).await;
    assert_eq!(session["progress"]["rated"], 0);
    assert_eq!(session["has_report"], false);
}

#[tokio::test]
async fn incomplete_finish_is_blocked_not_rejected() {
    let app = test_app();
    send_json(&app, Method::POST, "/api/assessment/start", None).await;
    send_json(
        &app,
        Method::PUT,
        "/api/assessment/answers/3",
        Some(json!({ "rating": "amber" })),
    )
    .await;

    let (status, body) = send_json(&app, Method::POST, "/api/assessment/finish", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["advanced"], false);
    assert_eq!(body["stage"], "assessment");
    assert_eq!(body["missing"], json!([1, 2, 4, 5, 6, 7, 8]));
}

#[tokio::test]
async fn rating_before_start_conflicts() {
    let app = test_app();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/assessment/answers/1",
        Some(json!({ "rating": "green" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "WRONG_STAGE");
    assert_eq!(body["details"]["stage"], "intro");
}

#[tokio::test]
async fn unknown_statement_is_bad_request() {
    let app = test_app();
    send_json(&app, Method::POST, "/api/assessment/start", None).await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/api/assessment/answers/42",
        Some(json!({ "rating": "green" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_STATEMENT");

    let (status, _) = send_json(
        &app,
        Method::PUT,
        "/api/assessment/answers/abc",
        Some(json!({ "rating": "green" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_before_generation_conflicts() {
    let app = test_app();

    let (status, body) = send_json(&app, Method::GET, "/api/assessment/report", None).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "REPORT_UNAVAILABLE");
}

#[tokio::test]
async fn blank_reflection_blocks_generation() {
    let app = test_app();
    send_json(&app, Method::POST, "/api/assessment/start", None).await;
    rate_all(&app, "red").await;
    send_json(&app, Method::POST, "/api/assessment/finish", None).await;
    send_json(
        &app,
        Method::PUT,
        "/api/assessment/reflections",
        Some(json!({ "strengths": "Calm in a crisis", "limitations": "   " })),
    )
    .await;

    let (_, body) = send_json(&app, Method::POST, "/api/assessment/report", None).await;

    assert_eq!(body["advanced"], false);
    assert_eq!(body["stage"], "reflection");
    assert!(body.get("missing").is_none());
}

#[tokio::test]
async fn generation_survives_client_disconnect() {
    let provider = MockAIProvider::new().with_delay(Duration::from_millis(300));
    let app = test_app_with(ActionPlanGenerator::with_provider(Arc::new(provider)));
    send_json(&app, Method::POST, "/api/assessment/start", None).await;
    rate_all(&app, "green").await;
    send_json(&app, Method::POST, "/api/assessment/finish", None).await;
    send_json(
        &app,
        Method::PUT,
        "/api/assessment/reflections",
        Some(json!({ "strengths": "I listen well", "limitations": "I avoid conflict" })),
    )
    .await;

    let abandoned = tokio::time::timeout(
        Duration::from_millis(50),
        send(&app, Method::POST, "/api/assessment/report", None),
    )
    .await;
    assert!(abandoned.is_err());

    // Waits on the session lock until the detached generation resolves.
    let (_, session) = send_json(&app, Method::GET, "/api/assessment", None).await;
    assert_eq!(session["stage"], "report");
    assert_eq!(session["has_report"], true);
}
