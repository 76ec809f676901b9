//! HTTP adapter for the assessment session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DimensionGroupResponse, ErrorResponse, RateStatementRequest, ReportQuery, SessionResponse,
    StatementResponse, StatementsResponse, TransitionResponse, UpdateReflectionsRequest,
};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
