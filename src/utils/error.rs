use thiserror::Error;

#[derive(Error, Debug)]
pub enum DealError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Card provider returned status {status}")]
    ProviderError { status: reqwest::StatusCode },

    #[error("Failed to parse card JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Fetch task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DealError>;
