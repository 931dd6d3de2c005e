use std::sync::Arc;

use llm_client::LlmClient;
use relay_core::Result;
use tracing::{info, instrument};

use crate::stage::{AnalyzeQuery, GenerateResponse, Stage};
use crate::state::ConversationState;

/// Linear pipeline: runs its stages in insertion order, each receiving the previous stage's state.
///
/// Holds no per-run data, so one instance is built at startup and shared across requests.
#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn add_stage(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// `START → AnalyzeQuery → GenerateResponse → END`.
    pub fn analyze_then_generate(llm: Arc<dyn LlmClient>) -> Self {
        Self::new()
            .add_stage(Arc::new(AnalyzeQuery::new()))
            .add_stage(Arc::new(GenerateResponse::new(llm)))
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Runs every stage to completion. The first stage error ends the run and is returned as-is.
    #[instrument(skip(self, state))]
    pub async fn run(&self, state: ConversationState) -> Result<ConversationState> {
        info!(
            query_len = state.user_query().len(),
            stages = self.stages.len(),
            "step: pipeline started"
        );

        let mut state = state;
        for stage in &self.stages {
            info!(stage = stage.name(), "step: stage running");
            state = stage.run(state).await?;
            info!(
                stage = stage.name(),
                message_count = state.messages().len(),
                "step: stage done"
            );
        }

        info!(
            message_count = state.messages().len(),
            "step: pipeline finished"
        );
        Ok(state)
    }
}
