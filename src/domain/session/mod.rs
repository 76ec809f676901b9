//! Session domain module.
//!
//! Drives one user through the assessment workflow. The aggregate holds all
//! session-scoped state; nothing survives a reset.

mod aggregate;
mod errors;
mod stage;

pub use aggregate::{AssessmentSession, Progress};
pub use errors::{Advance, BlockReason, SessionError};
pub use stage::Stage;
