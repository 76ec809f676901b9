//! Fixed plan substituted whenever generation fails.

use super::{ActionPlanReport, ActionStep, Approach, DevelopmentPlan, Synthesis};

/// Returns the hard-coded fallback Personal Action Plan.
///
/// The payload is fixed; callers compare against it field for field.
pub fn fallback_report() -> ActionPlanReport {
    ActionPlanReport {
        synthesis: Synthesis {
            key_strengths: "Demonstrates strong intuitive grasp of Warmth and Intent Validation. Self-reflection aligns with assessment in identifying high empathy but potential avoidance of conflict.".to_string(),
            key_priorities: "Strategic Decision Making under pressure is the critical derailer. The gap between 'Sensing' data and 'Responding' is too wide, leading to analysis paralysis.".to_string(),
        },
        development_plan: DevelopmentPlan {
            focus_area: "Strategic Decision Making: The Sensing-Sizing-Responding Framework".to_string(),
            reason_for_choosing: "Current tendency to wait for 100% information certainty is creating bottlenecks in agile project phases.".to_string(),
            goal_smart: "Within 30 days, apply the 70% rule to all reversible decisions, utilizing the 'Sizing' framework to categorize risks within 4 hours of issue identification.".to_string(),
            benefits: "Increased team velocity; reduction in personal cognitive load; shift from 'operational firefighter' to 'strategic architect'.".to_string(),
            risks: "Premature decision making without adequate counsel; perceived lack of thoroughness by risk-averse stakeholders.".to_string(),
            obstacles: "Deep-seated habit of perfectionism; fear of public failure.".to_string(),
            mitigation: "Use the Pre-Mortem technique explicitly in team meetings to formalize risk assessment, satisfying the need for safety while maintaining speed.".to_string(),
        },
        action_steps: vec![
            ActionStep::new(
                Approach::Education,
                "Review the 'Sensing-Sizing-Responding' module, specifically the case study on asymmetrical risk.",
                "Week 1",
            ),
            ActionStep::new(
                Approach::Experience,
                "Lead one 'Pre-Mortem' session for the Q3 roadmap, explicitly asking 'Why did this fail?' before starting.",
                "Week 2",
            ),
            ActionStep::new(
                Approach::Exposure,
                "Request feedback from the CFO on my decision speed vs. accuracy ratio over the last quarter.",
                "Week 4",
            ),
        ],
    }
}
