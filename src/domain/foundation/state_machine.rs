//! State machine trait for workflow enums.
//!
//! Gives stage-like enums one shape for declaring their transition graph and
//! validating a move before it is applied.

use super::ValidationError;

/// Trait for enums whose values form a transition graph.
///
/// Implementors list the edges; `transition_to` and `is_terminal` come for
/// free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for Stage {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Intro => vec![Assessment, Intro],
///             Assessment => vec![Reflection, Intro],
///             // ...
///         }
///     }
/// }
///
/// let next = Stage::Intro.transition_to(Stage::Assessment)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if a move from self to target is an edge of the graph.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs the transition, returning an error if it is not an edge.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if the current state has no outgoing transitions.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
