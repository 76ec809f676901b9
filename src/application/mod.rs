//! Application layer - orchestration between the domain and ports.

pub mod handlers;

pub use handlers::{ActionPlanGenerator, AssessmentWorkflow};
