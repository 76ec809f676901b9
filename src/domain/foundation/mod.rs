//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the assessment domain.

mod errors;
mod ids;
mod rating;
mod state_machine;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{SessionId, StatementId};
pub use rating::{rating_score, TrafficLight};
pub use state_machine::StateMachine;
