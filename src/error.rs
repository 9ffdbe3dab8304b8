use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color literal `{0}`: expected 3 or 6 hex digits")]
    InvalidColor(String),

    #[error("unknown semantic color `{0}`")]
    UnknownSemanticColor(String),

    #[error("chart engine initialization failed: {0}")]
    EngineInit(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
