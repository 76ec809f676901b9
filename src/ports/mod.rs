//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - generative-AI completion (Gemini, mock)
//! - `ActionPlanSource` - produces the report for a finished session
//! - `ReportRenderer` - turns a report into a display-ready document

mod action_plan_source;
mod ai_provider;
mod report_renderer;

pub use action_plan_source::{ActionPlanSource, GenerationError};
pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    RequestMetadata, TokenUsage,
};
pub use report_renderer::{
    ActionRow, ActionTable, DocumentSection, LabeledBlock, RadarAxis, RadarChart, ReportDocument,
    ReportRenderer,
};
