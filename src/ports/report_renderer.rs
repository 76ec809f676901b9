//! Report Renderer Port - presentation of a Personal Action Plan.
//!
//! This port defines the contract for turning an [`ActionPlanReport`] into a
//! structured, display-ready document. Rendering is pure and performs no
//! validation: whatever the report contains is shown as-is.

use serde::Serialize;

use crate::domain::report::{ActionPlanReport, ScoreProfile};

/// Port for rendering action plans.
///
/// # Contract
///
/// Implementations must:
/// - Emit the four numbered sections in fixed order
/// - Keep action steps in the order they were received
/// - Never fail; missing text renders as empty
///
/// # Usage
///
/// ```rust,ignore
/// let renderer: &dyn ReportRenderer = get_renderer();
/// let document = renderer.render(&report);
/// let markdown = renderer.to_printable(&document);
/// ```
pub trait ReportRenderer: Send + Sync {
    /// Render the report without a score chart.
    fn render(&self, report: &ActionPlanReport) -> ReportDocument;

    /// Render the report and attach a radar chart of the dimension scores.
    fn render_with_profile(&self, report: &ActionPlanReport, profile: &ScoreProfile) -> ReportDocument {
        let mut document = self.render(report);
        document.chart = Some(RadarChart::from_profile(profile));
        document
    }

    /// Produce a printable (Markdown) rendition of a rendered document.
    fn to_printable(&self, document: &ReportDocument) -> String;
}

/// Display-ready report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub subtitle: String,
    pub preamble: String,
    pub sections: Vec<DocumentSection>,
    pub action_table: ActionTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<RadarChart>,
    pub footer: Vec<String>,
}

/// A numbered section made of labeled text blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSection {
    pub heading: String,
    pub blocks: Vec<LabeledBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledBlock {
    pub label: String,
    pub content: String,
}

impl LabeledBlock {
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// The action-steps table, titled like a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionTable {
    pub heading: String,
    pub headers: Vec<String>,
    pub rows: Vec<ActionRow>,
}

/// One action step; `done` backs the empty status checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionRow {
    pub approach: String,
    pub action: String,
    pub target: String,
    pub done: bool,
}

/// Radar chart data: one axis per dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub full_mark: f32,
    pub axes: Vec<RadarAxis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub subject: String,
    pub score: f32,
}

impl RadarChart {
    pub fn from_profile(profile: &ScoreProfile) -> Self {
        Self {
            full_mark: crate::domain::report::FULL_MARK,
            axes: profile
                .scores
                .iter()
                .map(|s| RadarAxis {
                    subject: s.dimension.display_name().to_string(),
                    score: s.score,
                })
                .collect(),
        }
    }
}
