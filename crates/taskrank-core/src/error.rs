use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("limit must not be negative, got {0}")]
    InvalidLimit(i64),

    #[error("invalid scoring policy: {0}")]
    InvalidPolicy(String),

    #[error("failed to parse scoring policy: {0}")]
    PolicyFormat(#[from] serde_json::Error),
}
