//! Report domain - the Personal Action Plan and its supporting data.

mod action_plan;
mod fallback;
mod scores;

pub use action_plan::{ActionPlanReport, ActionStep, Approach, DevelopmentPlan, Synthesis};
pub use fallback::fallback_report;
pub use scores::{DimensionScore, ScoreProfile, FULL_MARK};
