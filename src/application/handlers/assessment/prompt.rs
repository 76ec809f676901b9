//! Prompt construction for action plan generation.
//!
//! The system instruction and the response schema are fixed. The user prompt
//! carries one summary line per catalog statement plus both reflections
//! verbatim.

use serde_json::{json, Value};

use crate::domain::assessment::{Reflections, ResponseState, StatementCatalog};
use crate::domain::foundation::TrafficLight;
use crate::domain::report::Approach;

/// Persona and structure instructions sent as the system instruction.
pub const SYSTEM_PROMPT: &str = r#"You are a strategic leadership consultant drafting a "Personal Action Plan" for a senior leader.
This is NOT a feedback report. It is a rigorous, forward-looking development plan document.

INPUT DATA:
1. Assessment Scores (Traffic Light system based on specific course behaviors).
2. User's Self-Reflected Strengths and Limitations.

YOUR TASK:
Draft a "Personal Action Plan" that bridges the gap between the user's self-perception and their assessment results.
The tone must be:
- Intellectually challenging: Question assumptions.
- High-level: Appropriate for senior executives.
- Specific: Reference the course concepts (Centering, Pre-Mortem, Sensing-Sizing, Strategic Silence).

STRUCTURE Requirements:
1. synthesis: concisely synthesize their verified strengths (High scores) and the critical priorities (Low scores + self-admitted limitations).
2. developmentPlan: Pick ONE high-impact area to focus on.
   - reasonForChoosing: Why this lever moves the biggest rock.
   - goalSMART: A specific, measurable outcome.
   - benefits: The ROI of this change.
   - risks/obstacles/mitigation: Real-world friction points.
3. actionSteps: Provide 3 distinct steps categorised by:
   - Experience (Doing the work)
   - Exposure (Shadowing/Feedback)
   - Education (Formal learning/Reviewing materials)

Format output as JSON. Avoid "Cheerleading". Be clinical and precise."#;

/// Rating assumed for a statement with no answer.
pub const UNANSWERED_DEFAULT: TrafficLight = TrafficLight::Red;

/// One line per catalog statement, in catalog order:
/// `- [GREEN] <text> (<dimension>)`.
///
/// Unanswered statements are reported as [`UNANSWERED_DEFAULT`].
pub fn format_assessment_summary(catalog: &StatementCatalog, responses: &ResponseState) -> String {
    catalog
        .statements()
        .iter()
        .map(|statement| {
            let rating = responses.rating(statement.id).unwrap_or(UNANSWERED_DEFAULT);
            format!(
                "- [{}] {} ({})",
                rating.as_str().to_uppercase(),
                statement.text,
                statement.dimension.display_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the user prompt around an assessment summary.
pub fn compose_user_prompt(summary: &str, reflections: &Reflections) -> String {
    format!(
        "LEADER PROFILE ANALYSIS:\n\
         \n\
         ASSESSMENT RESULTS (Behavioral Frequency):\n\
         {summary}\n\
         \n\
         SELF-REFLECTION:\n\
         - Perceived Strengths: \"{strengths}\"\n\
         - Perceived Limitations: \"{limitations}\"\n\
         \n\
         Draft the Personal Action Plan now.",
        summary = summary,
        strengths = reflections.strengths,
        limitations = reflections.limitations,
    )
}

/// Response schema mirroring `ActionPlanReport`.
pub fn action_plan_response_schema() -> Value {
    let approaches: Vec<&str> = Approach::ALL.iter().map(|a| a.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "synthesis": {
                "type": "OBJECT",
                "properties": {
                    "keyStrengths": { "type": "STRING" },
                    "keyPriorities": { "type": "STRING" }
                },
                "required": ["keyStrengths", "keyPriorities"]
            },
            "developmentPlan": {
                "type": "OBJECT",
                "properties": {
                    "focusArea": { "type": "STRING" },
                    "reasonForChoosing": { "type": "STRING" },
                    "goalSMART": { "type": "STRING" },
                    "benefits": { "type": "STRING" },
                    "risks": { "type": "STRING" },
                    "obstacles": { "type": "STRING" },
                    "mitigation": { "type": "STRING" }
                },
                "required": [
                    "focusArea",
                    "reasonForChoosing",
                    "goalSMART",
                    "benefits",
                    "risks",
                    "obstacles",
                    "mitigation"
                ]
            },
            "actionSteps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "approach": { "type": "STRING", "enum": approaches },
                        "action": { "type": "STRING" },
                        "targetDate": { "type": "STRING" }
                    },
                    "required": ["approach", "action", "targetDate"]
                }
            }
        },
        "required": ["synthesis", "developmentPlan", "actionSteps"]
    })
}
