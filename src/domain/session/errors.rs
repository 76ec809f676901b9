//! Session-specific error and outcome types.

use std::fmt;
use thiserror::Error;

use super::Stage;
use crate::domain::assessment::ReflectionField;
use crate::domain::foundation::{ErrorCode, StatementId};

/// Input the session refuses to apply.
///
/// Blocked stage transitions are not errors; see [`Advance`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Rating for an id that is not in the catalog.
    #[error("Unknown statement: {0}")]
    UnknownStatement(StatementId),

    /// Input event arrived while a different stage was active.
    #[error("Cannot {action} during the {current} stage")]
    WrongStage { action: &'static str, current: Stage },

    /// Report requested before one was produced.
    #[error("No report is available yet")]
    ReportUnavailable,
}

impl SessionError {
    pub fn wrong_stage(action: &'static str, current: Stage) -> Self {
        SessionError::WrongStage { action, current }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::UnknownStatement(_) => ErrorCode::UnknownStatement,
            SessionError::WrongStage { .. } => ErrorCode::WrongStage,
            SessionError::ReportUnavailable => ErrorCode::ReportUnavailable,
        }
    }
}

/// Why a transition attempt left the stage unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// The transition does not start from the active stage.
    WrongStage { current: Stage, required: Stage },
    /// Some catalog statements have no rating.
    Incomplete { missing: Vec<StatementId> },
    /// A reflection is empty after trimming.
    BlankReflection { field: ReflectionField },
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::WrongStage { current, required } => {
                write!(f, "requires the {} stage, currently {}", required, current)
            }
            BlockReason::Incomplete { missing } => {
                let ids: Vec<String> = missing.iter().map(|id| id.to_string()).collect();
                write!(f, "statements not yet rated: {}", ids.join(", "))
            }
            BlockReason::BlankReflection { field } => {
                write!(f, "reflection '{}' is blank", field)
            }
        }
    }
}

/// Result of a transition attempt.
///
/// A blocked attempt is a no-op, not a failure: the stage is unchanged and
/// the caller may simply keep collecting input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Advance {
    Moved { from: Stage, to: Stage },
    Blocked(BlockReason),
}

impl Advance {
    pub fn is_moved(&self) -> bool {
        matches!(self, Advance::Moved { .. })
    }

    pub fn block_reason(&self) -> Option<&BlockReason> {
        match self {
            Advance::Blocked(reason) => Some(reason),
            Advance::Moved { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_maps_to_codes() {
        assert_eq!(
            SessionError::UnknownStatement(StatementId::new(42)).code(),
            ErrorCode::UnknownStatement
        );
        assert_eq!(
            SessionError::wrong_stage("rate", Stage::Intro).code(),
            ErrorCode::WrongStage
        );
    }

    #[test]
    fn session_error_displays_stage() {
        let err = SessionError::wrong_stage("edit reflections", Stage::Analyzing);
        assert_eq!(err.to_string(), "Cannot edit reflections during the analyzing stage");
    }

    #[test]
    fn block_reason_lists_missing_ids() {
        let reason = BlockReason::Incomplete {
            missing: vec![StatementId::new(3), StatementId::new(8)],
        };
        assert_eq!(reason.to_string(), "statements not yet rated: 3, 8");
    }
}
