//! Stage enum for the assessment workflow.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The single active phase of an assessment session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Intro,
    Assessment,
    Reflection,
    /// Transient: always resolves to `Report` or back to `Assessment`.
    Analyzing,
    Report,
}

impl StateMachine for Stage {
    /// Valid transitions:
    /// - Intro -> Assessment
    /// - Assessment -> Reflection
    /// - Reflection -> Analyzing
    /// - Analyzing -> Report | Assessment
    /// - any -> Intro (reset)
    fn valid_transitions(&self) -> Vec<Self> {
        use Stage::*;
        match self {
            Intro => vec![Assessment, Intro],
            Assessment => vec![Reflection, Intro],
            Reflection => vec![Analyzing, Intro],
            Analyzing => vec![Report, Assessment, Intro],
            Report => vec![Intro],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Intro => "intro",
            Stage::Assessment => "assessment",
            Stage::Reflection => "reflection",
            Stage::Analyzing => "analyzing",
            Stage::Report => "report",
        };
        write!(f, "{}", s)
    }
}
