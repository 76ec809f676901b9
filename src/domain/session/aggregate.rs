//! Assessment session aggregate.
//!
//! Owns the stage, the in-progress responses and the generated report for one
//! user session, and enforces the guards between stages.
//!
//! # Invariants
//!
//! - Exactly one stage is active
//! - `Report` stage implies a present report
//! - Ratings only reference catalog statements
//! - Nothing changes while `Analyzing` except resolving it

use serde::Serialize;
use std::sync::Arc;

use super::{Advance, BlockReason, SessionError, Stage};
use crate::domain::assessment::{ReflectionField, Reflections, ResponseState, StatementCatalog};
use crate::domain::foundation::{SessionId, StateMachine, StatementId, TrafficLight};
use crate::domain::report::ActionPlanReport;

/// Rated statements out of the catalog total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub rated: usize,
    pub total: usize,
}

/// Session aggregate driving intro → assessment → reflection → analyzing →
/// report.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: SessionId,
    catalog: Arc<StatementCatalog>,
    stage: Stage,
    responses: ResponseState,
    report: Option<ActionPlanReport>,
}

impl AssessmentSession {
    /// Creates a session at the intro stage.
    pub fn new(catalog: Arc<StatementCatalog>) -> Self {
        Self {
            id: SessionId::new(),
            catalog,
            stage: Stage::Intro,
            responses: ResponseState::new(),
            report: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn catalog(&self) -> &StatementCatalog {
        &self.catalog
    }

    /// Shared handle to the catalog, for work that outlives a borrow.
    pub fn shared_catalog(&self) -> Arc<StatementCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn responses(&self) -> &ResponseState {
        &self.responses
    }

    pub fn report(&self) -> Option<&ActionPlanReport> {
        self.report.as_ref()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            rated: self.responses.answered_count(),
            total: self.catalog.len(),
        }
    }

    /// True iff every catalog statement has a rating.
    pub fn is_assessment_complete(&self) -> bool {
        self.responses.is_complete(&self.catalog)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input events
    // ─────────────────────────────────────────────────────────────────────────

    /// Records or overwrites the rating for a statement.
    ///
    /// # Errors
    ///
    /// - `WrongStage` outside the assessment stage
    /// - `UnknownStatement` if the id is not in the catalog
    pub fn rate(&mut self, id: StatementId, rating: TrafficLight) -> Result<(), SessionError> {
        if self.stage != Stage::Assessment {
            return Err(SessionError::wrong_stage("rate statements", self.stage));
        }
        if !self.catalog.contains(id) {
            return Err(SessionError::UnknownStatement(id));
        }
        self.responses.record(id, rating);
        Ok(())
    }

    /// Replaces one reflection text.
    ///
    /// # Errors
    ///
    /// - `WrongStage` outside the reflection stage
    pub fn set_reflection(
        &mut self,
        field: ReflectionField,
        text: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.stage != Stage::Reflection {
            return Err(SessionError::wrong_stage("edit reflections", self.stage));
        }
        self.responses.reflections_mut().set(field, text);
        Ok(())
    }

    /// Replaces both reflection texts.
    pub fn set_reflections(&mut self, reflections: Reflections) -> Result<(), SessionError> {
        if self.stage != Stage::Reflection {
            return Err(SessionError::wrong_stage("edit reflections", self.stage));
        }
        *self.responses.reflections_mut() = reflections;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Intro → Assessment.
    pub fn start(&mut self) -> Advance {
        self.move_from(Stage::Intro, Stage::Assessment)
    }

    /// Assessment → Reflection, guarded by the completeness predicate.
    pub fn finish_assessment(&mut self) -> Advance {
        if self.stage != Stage::Assessment {
            return self.wrong_stage(Stage::Assessment);
        }
        let missing = self.responses.missing(&self.catalog);
        if !missing.is_empty() {
            return Advance::Blocked(BlockReason::Incomplete { missing });
        }
        self.move_from(Stage::Assessment, Stage::Reflection)
    }

    /// Reflection → Analyzing, guarded by both reflections being non-blank.
    ///
    /// On success the caller owns the pending generation and must resolve it
    /// with [`complete_generation`](Self::complete_generation) or
    /// [`fail_generation`](Self::fail_generation).
    pub fn begin_generation(&mut self) -> Advance {
        if self.stage != Stage::Reflection {
            return self.wrong_stage(Stage::Reflection);
        }
        if let Some(field) = self.responses.reflections().first_blank() {
            return Advance::Blocked(BlockReason::BlankReflection { field });
        }
        self.move_from(Stage::Reflection, Stage::Analyzing)
    }

    /// Analyzing → Report, storing the produced artifact.
    pub fn complete_generation(&mut self, report: ActionPlanReport) -> Advance {
        if self.stage != Stage::Analyzing {
            return self.wrong_stage(Stage::Analyzing);
        }
        self.report = Some(report);
        self.move_from(Stage::Analyzing, Stage::Report)
    }

    /// Analyzing → Assessment after a failed generation.
    ///
    /// Answers and reflections are both kept so the user can resubmit
    /// without retyping.
    pub fn fail_generation(&mut self) -> Advance {
        self.move_from(Stage::Analyzing, Stage::Assessment)
    }

    /// Returns every field to its initial value and the stage to intro.
    pub fn reset(&mut self) {
        self.responses.clear();
        self.report = None;
        self.stage = Stage::Intro;
    }

    fn move_from(&mut self, required: Stage, target: Stage) -> Advance {
        if self.stage != required {
            return self.wrong_stage(required);
        }
        match self.stage.transition_to(target) {
            Ok(next) => {
                let from = self.stage;
                self.stage = next;
                Advance::Moved { from, to: next }
            }
            Err(_) => self.wrong_stage(required),
        }
    }

    fn wrong_stage(&self, required: Stage) -> Advance {
        Advance::Blocked(BlockReason::WrongStage {
            current: self.stage,
            required,
        })
    }
}
