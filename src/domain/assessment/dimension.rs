//! Leadership dimensions used to group statements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five fixed leadership-behavior categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Presence,
    Power,
    Warmth,
    Resilience,
    DecisionMaking,
}

impl Dimension {
    /// All dimensions in declaration order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Presence,
        Dimension::Power,
        Dimension::Warmth,
        Dimension::Resilience,
        Dimension::DecisionMaking,
    ];

    /// Human-readable name used in prompts and section headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Presence => "Presence & Impact",
            Dimension::Power => "Power & Influence",
            Dimension::Warmth => "Connection & Warmth",
            Dimension::Resilience => "Resilience & Energy",
            Dimension::DecisionMaking => "Strategic Decision Making",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
