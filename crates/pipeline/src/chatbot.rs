//! Chat session orchestrator: one fresh state per message, pipeline to completion, reply text out.

use std::sync::Arc;

use llm_client::LlmClient;
use relay_core::{RelayError, Result};
use tracing::instrument;

use crate::graph::Pipeline;
use crate::state::ConversationState;

/// Turns a user message into reply text. Cheap to clone; share one instance across handlers.
#[derive(Clone)]
pub struct ChatBot {
    pipeline: Pipeline,
}

impl ChatBot {
    /// ChatBot over the standard `AnalyzeQuery → GenerateResponse` pipeline.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self::with_pipeline(Pipeline::analyze_then_generate(llm))
    }

    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Runs the pipeline on a new state built from `user_message` and returns the final state.
    pub async fn run(&self, user_message: &str) -> Result<ConversationState> {
        self.pipeline.run(ConversationState::new(user_message)).await
    }

    /// Returns the content of the first message of the final state, unmodified.
    #[instrument(skip(self, user_message), fields(query_len = user_message.len()))]
    pub async fn respond(&self, user_message: &str) -> Result<String> {
        let state = self.run(user_message).await?;
        state
            .into_messages()
            .into_iter()
            .next()
            .map(|m| m.content)
            .ok_or(RelayError::EmptyPipelineResult)
    }
}
