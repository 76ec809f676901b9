//! Action Plan Source Port - where a session gets its report from.
//!
//! The session workflow only knows that *something* turns a completed
//! response state into an [`ActionPlanReport`]. The generator in the
//! application layer is the production implementation; tests substitute
//! failing or canned sources to drive the `Analyzing` stage either way.

use async_trait::async_trait;
use thiserror::Error;

use super::AIError;
use crate::domain::assessment::{ResponseState, StatementCatalog};
use crate::domain::foundation::SessionId;
use crate::domain::report::ActionPlanReport;

/// Port for producing an action plan from assessment input.
#[async_trait]
pub trait ActionPlanSource: Send + Sync {
    /// Produce a report for the given answers and reflections.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when no report could be produced. The
    /// workflow treats any error as a failed generation.
    async fn produce(
        &self,
        session_id: &SessionId,
        catalog: &StatementCatalog,
        responses: &ResponseState,
    ) -> Result<ActionPlanReport, GenerationError>;
}

/// Why a report could not be generated.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API credential was configured.
    #[error("API key missing")]
    MissingCredential,

    /// The provider call failed.
    #[error(transparent)]
    Provider(#[from] AIError),

    /// The provider answered without any text.
    #[error("no response text")]
    EmptyResponse,

    /// The response text is not a valid action plan.
    #[error("invalid action plan JSON: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Parse(err.to_string())
    }
}
