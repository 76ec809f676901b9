//! Template-based report renderer adapter.
//!
//! Lays an action plan out in the fixed four-section Personal Action Plan
//! template and prints it as Markdown. This is the primary implementation of
//! the ReportRenderer port.

use crate::domain::report::ActionPlanReport;
use crate::ports::{
    ActionRow, ActionTable, DocumentSection, LabeledBlock, RadarChart, ReportDocument,
    ReportRenderer,
};

pub const TITLE: &str = "Personal Action Plan";
pub const SUBTITLE: &str = "Executive Development: Self-Assessment Outcome";
pub const PREAMBLE: &str = "This document serves as a draft strategic development plan derived \
from your self-assessment and reflections. Use this as a basis for discussion with your mentor \
or executive coach.";
pub const FOOTER: [&str; 2] = [
    "Generated by Pinnacle Leadership Assessment",
    "Confidential Development Document",
];

/// Template-based implementation of ReportRenderer.
#[derive(Debug, Clone, Default)]
pub struct TemplateReportRenderer;

impl TemplateReportRenderer {
    pub fn new() -> Self {
        Self
    }

    fn synthesis_section(report: &ActionPlanReport) -> DocumentSection {
        DocumentSection {
            heading: "1. Diagnosis & Synthesis".to_string(),
            blocks: vec![
                LabeledBlock::new("Key Strengths", &report.synthesis.key_strengths),
                LabeledBlock::new("Key Priorities / Derailers", &report.synthesis.key_priorities),
            ],
        }
    }

    fn development_section(report: &ActionPlanReport) -> DocumentSection {
        let plan = &report.development_plan;
        DocumentSection {
            heading: "2. Development Need".to_string(),
            blocks: vec![
                LabeledBlock::new("Focus Area", &plan.focus_area),
                LabeledBlock::new("Reason for Choosing", &plan.reason_for_choosing),
                LabeledBlock::new("Goal (SMART)", &plan.goal_smart),
                LabeledBlock::new("Benefits", &plan.benefits),
            ],
        }
    }

    fn obstacles_section(report: &ActionPlanReport) -> DocumentSection {
        let plan = &report.development_plan;
        DocumentSection {
            heading: "3. Obstacles & Mitigation".to_string(),
            blocks: vec![
                LabeledBlock::new(
                    "Obstacles & Risks",
                    format!("{} {}", plan.obstacles, plan.risks),
                ),
                LabeledBlock::new("Mitigation Strategy", &plan.mitigation),
            ],
        }
    }

    fn action_table(report: &ActionPlanReport) -> ActionTable {
        ActionTable {
            heading: "4. Action Steps (70/20/10)".to_string(),
            headers: ["Approach", "Action", "Target", "Status"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            rows: report
                .action_steps
                .iter()
                .map(|step| ActionRow {
                    approach: step.approach.to_string(),
                    action: step.action.clone(),
                    target: step.target_date.clone(),
                    done: false,
                })
                .collect(),
        }
    }

    fn print_chart(out: &mut String, chart: &RadarChart) {
        out.push_str("## Score Profile\n\n");
        out.push_str("| Dimension | Score |\n");
        out.push_str("|-----------|-------|\n");
        for axis in &chart.axes {
            out.push_str(&format!(
                "| {} | {:.1} / {} |\n",
                table_cell(&axis.subject),
                axis.score,
                chart.full_mark
            ));
        }
        out.push('\n');
    }
}

/// Escapes text for a single Markdown table cell.
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}

impl ReportRenderer for TemplateReportRenderer {
    fn render(&self, report: &ActionPlanReport) -> ReportDocument {
        ReportDocument {
            title: TITLE.to_string(),
            subtitle: SUBTITLE.to_string(),
            preamble: PREAMBLE.to_string(),
            sections: vec![
                Self::synthesis_section(report),
                Self::development_section(report),
                Self::obstacles_section(report),
            ],
            action_table: Self::action_table(report),
            chart: None,
            footer: FOOTER.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn to_printable(&self, document: &ReportDocument) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", document.title));
        out.push_str(&format!("*{}*\n\n", document.subtitle));
        out.push_str(&format!("> {}\n\n", document.preamble));

        if let Some(chart) = &document.chart {
            Self::print_chart(&mut out, chart);
        }

        for section in &document.sections {
            out.push_str(&format!("## {}\n\n", section.heading));
            for block in &section.blocks {
                out.push_str(&format!("### {}\n\n{}\n\n", block.label, block.content));
            }
        }

        let table = &document.action_table;
        out.push_str(&format!("## {}\n\n", table.heading));
        out.push_str(&format!("| {} |\n", table.headers.join(" | ")));
        out.push_str(&format!(
            "|{}\n",
            table.headers.iter().map(|_| "---|").collect::<String>()
        ));
        for row in &table.rows {
            out.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                table_cell(&row.approach),
                table_cell(&row.action),
                table_cell(&row.target),
                if row.done { "[x]" } else { "[ ]" }
            ));
        }

        out.push_str("\n---\n\n");
        out.push_str(&document.footer.join(" | "));
        out.push('\n');

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::Dimension;
    use crate::domain::report::{
        fallback_report, ActionStep, Approach, DimensionScore, ScoreProfile,
    };

    fn labels(section: &DocumentSection) -> Vec<&str> {
        section.blocks.iter().map(|b| b.label.as_str()).collect()
    }

    #[test]
    fn sections_follow_template_order() {
        let doc = TemplateReportRenderer::new().render(&fallback_report());

        let headings: Vec<&str> = doc.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "1. Diagnosis & Synthesis",
                "2. Development Need",
                "3. Obstacles & Mitigation"
            ]
        );
        assert_eq!(doc.action_table.heading, "4. Action Steps (70/20/10)");
        assert_eq!(labels(&doc.sections[0]), vec!["Key Strengths", "Key Priorities / Derailers"]);
        assert_eq!(
            labels(&doc.sections[1]),
            vec!["Focus Area", "Reason for Choosing", "Goal (SMART)", "Benefits"]
        );
        assert_eq!(labels(&doc.sections[2]), vec!["Obstacles & Risks", "Mitigation Strategy"]);
    }

    #[test]
    fn header_and_footer_are_fixed() {
        let doc = TemplateReportRenderer::new().render(&fallback_report());

        assert_eq!(doc.title, "Personal Action Plan");
        assert_eq!(doc.subtitle, "Executive Development: Self-Assessment Outcome");
        assert!(doc.preamble.contains("mentor or executive coach"));
        assert_eq!(doc.footer.len(), 2);
        assert!(doc.chart.is_none());
    }

    #[test]
    fn obstacles_block_joins_obstacles_then_risks() {
        let report = fallback_report();
        let doc = TemplateReportRenderer::new().render(&report);

        let expected = format!(
            "{} {}",
            report.development_plan.obstacles, report.development_plan.risks
        );
        assert_eq!(doc.sections[2].blocks[0].content, expected);
    }

    #[test]
    fn action_rows_keep_received_order_and_start_unchecked() {
        let mut report = fallback_report();
        report.action_steps = vec![
            ActionStep::new(Approach::Exposure, "Ask the CFO", "Week 4"),
            ActionStep::new(Approach::Exposure, "Shadow the CEO", "Week 6"),
        ];

        let doc = TemplateReportRenderer::new().render(&report);

        assert_eq!(doc.action_table.headers, vec!["Approach", "Action", "Target", "Status"]);
        let actions: Vec<&str> = doc.action_table.rows.iter().map(|r| r.action.as_str()).collect();
        assert_eq!(actions, vec!["Ask the CFO", "Shadow the CEO"]);
        assert!(doc.action_table.rows.iter().all(|r| !r.done));
    }

    #[test]
    fn renders_empty_steps_without_validation() {
        let mut report = fallback_report();
        report.action_steps.clear();
        report.synthesis.key_strengths.clear();

        let doc = TemplateReportRenderer::new().render(&report);

        assert!(doc.action_table.rows.is_empty());
        assert_eq!(doc.sections[0].blocks[0].content, "");
    }

    #[test]
    fn render_with_profile_attaches_chart() {
        let profile = ScoreProfile {
            scores: vec![DimensionScore {
                dimension: Dimension::Resilience,
                score: 3.0,
            }],
        };

        let doc = TemplateReportRenderer::new().render_with_profile(&fallback_report(), &profile);

        let chart = doc.chart.expect("chart attached");
        assert_eq!(chart.axes[0].subject, "Resilience & Energy");
    }

    #[test]
    fn printable_markdown_contains_sections_and_table() {
        let renderer = TemplateReportRenderer::new();
        let markdown = renderer.to_printable(&renderer.render(&fallback_report()));

        assert!(markdown.starts_with("# Personal Action Plan\n"));
        assert!(markdown.contains("## 1. Diagnosis & Synthesis"));
        assert!(markdown.contains("### Goal (SMART)"));
        assert!(markdown.contains("| Approach | Action | Target | Status |"));
        assert!(markdown.contains("| Education |"));
        assert!(markdown.contains("| Week 1 | [ ] |"));
        assert!(markdown.trim_end().ends_with("Confidential Development Document"));

        let synthesis = markdown.find("## 1.").unwrap();
        let steps = markdown.find("## 4.").unwrap();
        assert!(synthesis < steps);
    }

    #[test]
    fn printable_escapes_table_cells() {
        let mut report = fallback_report();
        report.action_steps = vec![ActionStep::new(Approach::Education, "Read A | B", "Week\n1")];
        let renderer = TemplateReportRenderer::new();

        let markdown = renderer.to_printable(&renderer.render(&report));

        assert!(markdown.contains("| Read A \\| B | Week<br>1 |"));
    }

    #[test]
    fn printable_includes_score_profile_when_charted() {
        let renderer = TemplateReportRenderer::new();
        let profile = ScoreProfile {
            scores: vec![DimensionScore {
                dimension: Dimension::Presence,
                score: 4.0,
            }],
        };

        let markdown =
            renderer.to_printable(&renderer.render_with_profile(&fallback_report(), &profile));

        assert!(markdown.contains("## Score Profile"));
        assert!(markdown.contains("| Presence & Impact | 4.0 / 5 |"));
    }
}
