//! ActionPlanGenerator - drafts a Personal Action Plan through an AI provider.
//!
//! `try_generate` reports every failure as a `GenerationError`. `generate`
//! is the boundary used by the session: it never fails and substitutes the
//! fixed fallback plan instead.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::prompt::{
    action_plan_response_schema, compose_user_prompt, format_assessment_summary, SYSTEM_PROMPT,
};
use crate::domain::assessment::{ResponseState, StatementCatalog};
use crate::domain::foundation::SessionId;
use crate::domain::report::{fallback_report, ActionPlanReport};
use crate::ports::{
    AIProvider, ActionPlanSource, CompletionRequest, GenerationError, RequestMetadata,
};

/// Generates action plans, falling back to a fixed plan on any failure.
#[derive(Clone)]
pub struct ActionPlanGenerator {
    provider: Option<Arc<dyn AIProvider>>,
}

impl ActionPlanGenerator {
    /// Creates a generator. `None` means no credential is configured.
    pub fn new(provider: Option<Arc<dyn AIProvider>>) -> Self {
        Self { provider }
    }

    pub fn with_provider(provider: Arc<dyn AIProvider>) -> Self {
        Self::new(Some(provider))
    }

    /// A generator that always answers with the fallback plan.
    pub fn offline() -> Self {
        Self::new(None)
    }

    /// Builds the completion request for the given answers and reflections.
    pub fn build_request(
        session_id: &SessionId,
        catalog: &StatementCatalog,
        responses: &ResponseState,
    ) -> CompletionRequest {
        let summary = format_assessment_summary(catalog, responses);
        let prompt = compose_user_prompt(&summary, responses.reflections());

        CompletionRequest::new(RequestMetadata::new(*session_id, Uuid::new_v4().to_string()))
            .with_system_prompt(SYSTEM_PROMPT)
            .with_user_prompt(prompt)
            .with_json_schema(action_plan_response_schema())
    }

    /// Calls the provider and parses its text as an action plan.
    ///
    /// # Errors
    ///
    /// - `MissingCredential` if no provider is configured
    /// - `Provider` if the call fails
    /// - `EmptyResponse` if the response has no text
    /// - `Parse` if the text is not a valid plan
    pub async fn try_generate(
        &self,
        session_id: &SessionId,
        catalog: &StatementCatalog,
        responses: &ResponseState,
    ) -> Result<ActionPlanReport, GenerationError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(GenerationError::MissingCredential)?;

        let request = Self::build_request(session_id, catalog, responses);
        let info = provider.provider_info();
        tracing::debug!(
            session_id = %session_id,
            provider = %info.name,
            model = %info.model,
            "Requesting action plan"
        );

        let response = provider.complete(request).await?;

        tracing::debug!(
            session_id = %session_id,
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            "Action plan completion received"
        );

        if response.content.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(serde_json::from_str(&response.content)?)
    }

    /// Generates a plan, substituting the fallback plan on any failure.
    pub async fn generate(
        &self,
        session_id: &SessionId,
        catalog: &StatementCatalog,
        responses: &ResponseState,
    ) -> ActionPlanReport {
        match self.try_generate(session_id, catalog, responses).await {
            Ok(report) => report,
            Err(err) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %err,
                    "Action plan generation failed, falling back to default plan"
                );
                fallback_report()
            }
        }
    }
}

#[async_trait]
impl ActionPlanSource for ActionPlanGenerator {
    async fn produce(
        &self,
        session_id: &SessionId,
        catalog: &StatementCatalog,
        responses: &ResponseState,
    ) -> Result<ActionPlanReport, GenerationError> {
        Ok(self.generate(session_id, catalog, responses).await)
    }
}
