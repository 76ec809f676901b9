//! Application handlers.
//!
//! Handlers that orchestrate domain operations over ports.

pub mod assessment;

pub use assessment::{ActionPlanGenerator, AssessmentWorkflow};
