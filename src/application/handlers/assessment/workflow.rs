//! AssessmentWorkflow - drives one session through generation.
//!
//! Wraps the session aggregate together with the source that produces its
//! report. All input events pass straight through to the aggregate; only
//! `generate_report` adds orchestration.

use std::sync::Arc;

use crate::domain::assessment::{ReflectionField, Reflections, StatementCatalog};
use crate::domain::foundation::{StatementId, TrafficLight};
use crate::domain::report::{ActionPlanReport, ScoreProfile};
use crate::domain::session::{Advance, AssessmentSession, SessionError};
use crate::ports::ActionPlanSource;

/// One session plus the report source it generates with.
pub struct AssessmentWorkflow {
    session: AssessmentSession,
    source: Arc<dyn ActionPlanSource>,
}

impl AssessmentWorkflow {
    pub fn new(catalog: Arc<StatementCatalog>, source: Arc<dyn ActionPlanSource>) -> Self {
        Self {
            session: AssessmentSession::new(catalog),
            source,
        }
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn start(&mut self) -> Advance {
        self.session.start()
    }

    pub fn rate(&mut self, id: StatementId, rating: TrafficLight) -> Result<(), SessionError> {
        self.session.rate(id, rating)
    }

    pub fn finish_assessment(&mut self) -> Advance {
        self.session.finish_assessment()
    }

    pub fn set_reflection(
        &mut self,
        field: ReflectionField,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.session.set_reflection(field, text)
    }

    pub fn set_reflections(&mut self, reflections: Reflections) -> Result<(), SessionError> {
        self.session.set_reflections(reflections)
    }

    /// Reflection → Analyzing → Report (or back to Assessment on failure).
    ///
    /// A blocked guard returns without contacting the source. Otherwise the
    /// session stays in `Analyzing` for the duration of the call. If this
    /// future is dropped before the source answers, the session falls back
    /// to `Assessment` as if generation had failed.
    pub async fn generate_report(&mut self) -> Advance {
        let begun = self.session.begin_generation();
        if !begun.is_moved() {
            return begun;
        }

        let session_id = *self.session.id();
        let catalog = self.session.shared_catalog();
        let responses = self.session.responses().clone();
        let source = Arc::clone(&self.source);
        let pending = PendingGeneration::new(&mut self.session);

        match source.produce(&session_id, &catalog, &responses).await {
            Ok(report) => {
                tracing::info!(session_id = %session_id, "Action plan ready");
                pending.complete(report)
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %err,
                    "Action plan generation failed, returning to assessment"
                );
                pending.fail()
            }
        }
    }

    /// The generated report.
    ///
    /// # Errors
    ///
    /// `ReportUnavailable` before a report has been produced.
    pub fn report(&self) -> Result<&ActionPlanReport, SessionError> {
        self.session.report().ok_or(SessionError::ReportUnavailable)
    }

    /// Per-dimension averages of the current ratings.
    pub fn score_profile(&self) -> ScoreProfile {
        ScoreProfile::compute(self.session.catalog(), self.session.responses())
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}

/// A session sitting in `Analyzing`; resolved exactly once.
///
/// Dropping it unresolved fails the generation so the session never stays
/// in `Analyzing`.
struct PendingGeneration<'a> {
    session: &'a mut AssessmentSession,
    resolved: bool,
}

impl<'a> PendingGeneration<'a> {
    fn new(session: &'a mut AssessmentSession) -> Self {
        Self {
            session,
            resolved: false,
        }
    }

    fn complete(mut self, report: ActionPlanReport) -> Advance {
        self.resolved = true;
        self.session.complete_generation(report)
    }

    fn fail(mut self) -> Advance {
        self.resolved = true;
        self.session.fail_generation()
    }
}

impl Drop for PendingGeneration<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            tracing::warn!(
                session_id = %self.session.id(),
                "Action plan generation abandoned, returning to assessment"
            );
            let _ = self.session.fail_generation();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::application::handlers::assessment::ActionPlanGenerator;
    use crate::domain::assessment::ResponseState;
    use crate::domain::foundation::SessionId;
    use crate::domain::report::fallback_report;
    use crate::domain::session::{BlockReason, Stage};
    use crate::ports::GenerationError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::timeout;

    struct FailingSource {
        calls: AtomicUsize,
    }

    impl FailingSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ActionPlanSource for FailingSource {
        async fn produce(
            &self,
            _session_id: &SessionId,
            _catalog: &StatementCatalog,
            _responses: &ResponseState,
        ) -> Result<ActionPlanReport, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(GenerationError::EmptyResponse)
        }
    }

    fn workflow_with(source: Arc<dyn ActionPlanSource>) -> AssessmentWorkflow {
        AssessmentWorkflow::new(StatementCatalog::reference(), source)
    }

    fn rate_all(workflow: &mut AssessmentWorkflow, rating: TrafficLight) {
        let ids: Vec<StatementId> = workflow.session().catalog().ids().collect();
        for id in ids {
            workflow.rate(id, rating).unwrap();
        }
    }

    fn reach_reflection(workflow: &mut AssessmentWorkflow) {
        assert!(workflow.start().is_moved());
        rate_all(workflow, TrafficLight::Green);
        assert!(workflow.finish_assessment().is_moved());
        workflow
            .set_reflections(Reflections::new("I listen well", "I avoid conflict"))
            .unwrap();
    }

    #[tokio::test]
    async fn offline_generation_reaches_report_with_fallback() {
        let mut workflow = workflow_with(Arc::new(ActionPlanGenerator::offline()));
        reach_reflection(&mut workflow);

        let outcome = workflow.generate_report().await;

        assert_eq!(
            outcome,
            Advance::Moved {
                from: Stage::Analyzing,
                to: Stage::Report
            }
        );
        assert_eq!(workflow.session().stage(), Stage::Report);
        assert_eq!(workflow.report().unwrap(), &fallback_report());
    }

    #[tokio::test]
    async fn blank_reflection_blocks_without_calling_source() {
        let source = Arc::new(FailingSource::new());
        let mut workflow = workflow_with(source.clone());
        reach_reflection(&mut workflow);
        workflow
            .set_reflection(ReflectionField::Limitations, "   ")
            .unwrap();

        let outcome = workflow.generate_report().await;

        assert_eq!(
            outcome.block_reason(),
            Some(&BlockReason::BlankReflection {
                field: ReflectionField::Limitations
            })
        );
        assert_eq!(workflow.session().stage(), Stage::Reflection);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_generation_returns_to_assessment_keeping_input() {
        let source = Arc::new(FailingSource::new());
        let mut workflow = workflow_with(source.clone());
        reach_reflection(&mut workflow);

        let outcome = workflow.generate_report().await;

        assert_eq!(
            outcome,
            Advance::Moved {
                from: Stage::Analyzing,
                to: Stage::Assessment
            }
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(workflow.session().is_assessment_complete());
        assert_eq!(
            workflow.session().responses().reflections(),
            &Reflections::new("I listen well", "I avoid conflict")
        );
        assert!(matches!(workflow.report(), Err(SessionError::ReportUnavailable)));
    }

    #[tokio::test]
    async fn generate_outside_reflection_is_blocked() {
        let mut workflow = workflow_with(Arc::new(ActionPlanGenerator::offline()));

        let outcome = workflow.generate_report().await;

        assert!(!outcome.is_moved());
        assert_eq!(workflow.session().stage(), Stage::Intro);
    }

    #[tokio::test]
    async fn reset_after_report_clears_everything() {
        let mut workflow = workflow_with(Arc::new(ActionPlanGenerator::offline()));
        reach_reflection(&mut workflow);
        let _ = workflow.generate_report().await;

        workflow.reset();

        assert_eq!(workflow.session().stage(), Stage::Intro);
        assert_eq!(workflow.session().progress().rated, 0);
        assert!(workflow.report().is_err());
        assert_eq!(
            workflow.session().responses().reflections(),
            &Reflections::default()
        );
    }

    #[tokio::test]
    async fn abandoned_generation_returns_to_assessment() {
        let provider = MockAIProvider::new().with_delay(Duration::from_secs(5));
        let mut workflow =
            workflow_with(Arc::new(ActionPlanGenerator::with_provider(Arc::new(provider))));
        reach_reflection(&mut workflow);

        let outcome = timeout(Duration::from_millis(50), workflow.generate_report()).await;

        assert!(outcome.is_err());
        assert_eq!(workflow.session().stage(), Stage::Assessment);
        assert!(workflow.session().is_assessment_complete());
        assert_eq!(
            workflow.session().responses().reflections(),
            &Reflections::new("I listen well", "I avoid conflict")
        );

        assert!(workflow.finish_assessment().is_moved());
        assert_eq!(workflow.session().stage(), Stage::Reflection);
    }

    #[test]
    fn score_profile_reflects_ratings() {
        let mut workflow = workflow_with(Arc::new(ActionPlanGenerator::offline()));
        let _ = workflow.start();
        rate_all(&mut workflow, TrafficLight::Amber);

        let profile = workflow.score_profile();

        assert_eq!(profile.scores.len(), 5);
        assert!(profile.scores.iter().all(|s| s.score == 3.0));
    }
}
