//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, ratings, errors, state machine)
//! - `assessment` - Statement catalog, dimensions and user responses
//! - `report` - Personal Action Plan, fallback plan and score profile
//! - `session` - Assessment session aggregate and stage machine

pub mod assessment;
pub mod foundation;
pub mod report;
pub mod session;
