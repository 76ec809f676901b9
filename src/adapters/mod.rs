//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generation service clients (Gemini, mock)
//! - `document` - Report rendering
//! - `http` - axum REST API over the assessment session

pub mod ai;
pub mod document;
pub mod http;
