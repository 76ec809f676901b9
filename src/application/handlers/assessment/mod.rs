//! Assessment handlers - report generation and session orchestration.

mod generate_action_plan;
mod prompt;
mod workflow;

pub use generate_action_plan::ActionPlanGenerator;
pub use prompt::{
    action_plan_response_schema, compose_user_prompt, format_assessment_summary, SYSTEM_PROMPT,
    UNANSWERED_DEFAULT,
};
pub use workflow::AssessmentWorkflow;
