//! Personal Action Plan - the artifact produced by report generation.
//!
//! Field names on the wire are camelCase and must match the response schema
//! sent to the generation service exactly; the struct is deserialized straight
//! from the model output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Development approach of an action step (70/20/10 model).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Approach {
    /// Doing the work.
    Experience,
    /// Shadowing and feedback.
    Exposure,
    /// Formal learning and reviewing materials.
    Education,
}

impl Approach {
    pub const ALL: [Approach; 3] = [Approach::Experience, Approach::Exposure, Approach::Education];

    pub fn as_str(&self) -> &'static str {
        match self {
            Approach::Experience => "Experience",
            Approach::Exposure => "Exposure",
            Approach::Education => "Education",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Verified strengths and critical priorities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synthesis {
    pub key_strengths: String,
    pub key_priorities: String,
}

/// The single high-impact development area and its rationale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentPlan {
    pub focus_area: String,
    pub reason_for_choosing: String,
    #[serde(rename = "goalSMART")]
    pub goal_smart: String,
    pub benefits: String,
    pub risks: String,
    pub obstacles: String,
    pub mitigation: String,
}

/// One concrete step of the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionStep {
    pub approach: Approach,
    pub action: String,
    pub target_date: String,
}

impl ActionStep {
    pub fn new(approach: Approach, action: impl Into<String>, target_date: impl Into<String>) -> Self {
        Self {
            approach,
            action: action.into(),
            target_date: target_date.into(),
        }
    }
}

/// Complete Personal Action Plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlanReport {
    pub synthesis: Synthesis,
    pub development_plan: DevelopmentPlan,
    pub action_steps: Vec<ActionStep>,
}
