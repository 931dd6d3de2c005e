use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Pipeline finished without any message")]
    EmptyPipelineResult,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not set; check the environment or the .env file")]
    MissingVar { key: String },
}

impl ConfigError {
    /// Name of the variable that caused the failure.
    pub fn key(&self) -> &str {
        match self {
            ConfigError::MissingVar { key } => key,
        }
    }
}

/// LLM backend call failed (network, authentication, quota). The cause is kept as `source`.
#[derive(Error, Debug)]
#[error("LLM backend call failed: {source}")]
pub struct GenerationError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl GenerationError {
    pub fn new(cause: anyhow::Error) -> Self {
        Self {
            source: cause.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
